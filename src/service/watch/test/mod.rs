use std::{sync::Mutex, time::Duration};

use async_trait::async_trait;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::{announced_file::AnnouncedFileRepository, drive_watch::DriveWatchRepository},
    error::{drive::DriveError, watch::WatchError},
    model::{
        change::ChangeEvent,
        drive_file::{FileRecord, Snapshot},
        watch::{CycleReport, CycleSummary, WatchStatus},
    },
    service::{drive::ListingSource, notification::NotificationSink, watch::DriveWatcher},
};

mod load;

const FOLDER: &str = "folder";
const TIMEOUT: Duration = Duration::from_secs(5);

fn record(key: &str, modified_at: &str, size_bytes: u64) -> FileRecord {
    FileRecord {
        key: key.to_string(),
        remote_id: format!("drive-{}", key),
        modified_at: modified_at.to_string(),
        size_bytes,
        created_at: None,
    }
}

/// Listing source serving whatever listing it was last given, or failing.
struct FakeSource {
    listing: Mutex<Option<Vec<FileRecord>>>,
}

impl FakeSource {
    fn new(listing: Vec<FileRecord>) -> Self {
        Self {
            listing: Mutex::new(Some(listing)),
        }
    }

    fn failing() -> Self {
        Self {
            listing: Mutex::new(None),
        }
    }

    fn set(&self, listing: Vec<FileRecord>) {
        *self.listing.lock().unwrap() = Some(listing);
    }

    fn fail(&self) {
        *self.listing.lock().unwrap() = None;
    }
}

#[async_trait]
impl ListingSource for FakeSource {
    async fn list_folder(&self) -> Result<Vec<FileRecord>, DriveError> {
        let listing = self.listing.lock().unwrap().clone();

        listing.ok_or_else(|| DriveError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "backend error".to_string(),
        })
    }
}

/// Listing source that never answers in time.
struct StalledSource;

#[async_trait]
impl ListingSource for StalledSource {
    async fn list_folder(&self) -> Result<Vec<FileRecord>, DriveError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(Vec::new())
    }
}

/// Sink recording every event it is handed.
#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<ChangeEvent>>,
    failing: bool,
}

impl RecordingSink {
    fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    fn keys(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.key().to_string())
            .collect()
    }

    fn events(&self) -> Vec<ChangeEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, event: &ChangeEvent) -> Result<(), WatchError> {
        self.events.lock().unwrap().push(event.clone());

        if self.failing {
            return Err(WatchError::Notify {
                key: event.key().to_string(),
                reason: "channel unreachable".to_string(),
            });
        }

        Ok(())
    }
}

fn summary(report: CycleReport) -> CycleSummary {
    match report {
        CycleReport::Detected(summary) => summary,
        other => panic!("expected a detection cycle, got {:?}", other),
    }
}
