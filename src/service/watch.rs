//! Drive folder watcher: snapshot tracking, change detection and announcements.
//!
//! A [`DriveWatcher`] is shared between the cron job and the `/notif` command as a
//! [`WatchHandle`]. Holding its mutex for the whole of a cycle guarantees cycles
//! never overlap and that switching notifications on or off never interleaves with a
//! running comparison.

pub mod detector;
pub mod notified;
pub mod store;

#[cfg(test)]
mod test;

use std::{sync::Arc, time::Duration};

use sea_orm::{DatabaseConnection, DbErr};
use tokio::sync::Mutex;

use crate::{
    data::{announced_file::AnnouncedFileRepository, drive_watch::DriveWatchRepository},
    error::{drive::DriveError, watch::WatchError},
    model::{
        change::{ChangeEvent, Detection},
        drive_file::FileRecord,
        watch::{CycleReport, CycleSummary, WatchStatus},
    },
    service::{drive::ListingSource, notification::NotificationSink},
};

use self::{detector::detect, notified::NotifiedSet, store::SnapshotStore};

/// Watcher shared between the scheduler and the bot.
pub type WatchHandle = Arc<Mutex<DriveWatcher>>;

/// Watches one Drive folder and announces added and updated files.
#[derive(Debug)]
pub struct DriveWatcher {
    folder_id: String,
    enabled: bool,
    /// `enabled` changed since it was last written.
    enabled_dirty: bool,
    store: SnapshotStore,
    notified: NotifiedSet,
}

impl DriveWatcher {
    /// Creates a disabled, unseeded watcher with no persisted history.
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            enabled: false,
            enabled_dirty: false,
            store: SnapshotStore::new(),
            notified: NotifiedSet::new(),
        }
    }

    /// Restores the watcher for `folder_id` from the database.
    ///
    /// A persisted snapshot counts as seeded, so a restart resumes detection where it
    /// left off instead of re-seeding and silently swallowing changes made while the
    /// bot was down. An unreadable snapshot blob is logged and dropped; the watcher
    /// starts unseeded and the next enabled cycle seeds it again.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `folder_id` - Drive folder the watcher is scoped to
    ///
    /// # Returns
    /// - `Ok(DriveWatcher)` - Restored watcher, or a fresh one if nothing was stored
    /// - `Err(DbErr)` - Database error
    pub async fn load(db: &DatabaseConnection, folder_id: impl Into<String>) -> Result<Self, DbErr> {
        let mut watcher = Self::new(folder_id);

        if let Some(state) = DriveWatchRepository::new(db).load(&watcher.folder_id).await? {
            watcher.enabled = state.enabled;
            if let Some(snapshot) = state.snapshot {
                watcher.store = SnapshotStore::restore(snapshot);
            }
            if let Some(reason) = state.corrupt_snapshot {
                tracing::error!(
                    "Discarding corrupt snapshot stored for folder {}, will re-seed: {}",
                    watcher.folder_id,
                    reason
                );
            }
        }

        let keys = AnnouncedFileRepository::new(db).get_all_keys().await?;
        watcher.notified = NotifiedSet::from_keys(keys);

        tracing::info!(
            "Loaded drive watcher for folder {} (enabled: {}, tracked files: {}, announced: {})",
            watcher.folder_id,
            watcher.enabled,
            watcher.store.len(),
            watcher.notified.len()
        );

        Ok(watcher)
    }

    pub fn into_handle(self) -> WatchHandle {
        Arc::new(Mutex::new(self))
    }

    pub fn status(&self) -> WatchStatus {
        WatchStatus {
            enabled: self.enabled,
            seeded: self.store.is_seeded(),
            tracked_files: self.store.len(),
            announced_files: self.notified.len(),
        }
    }

    /// Runs one polling cycle.
    ///
    /// Fetches the listing, compares it against the snapshot and hands every change to
    /// `sink`. An `Added` event for a key that was announced before is suppressed.
    /// Added keys join the announced set after the delivery attempt whether or not it
    /// succeeded, so a file is announced at most once.
    ///
    /// # Arguments
    /// - `db` - Database connection used to persist state after the cycle
    /// - `source` - Folder listing source
    /// - `sink` - Receiver of change notifications
    /// - `fetch_timeout` - Upper bound for retrieving the listing
    ///
    /// # Returns
    /// - `Ok(CycleReport::Disabled)` - Notifications are off; nothing was fetched
    /// - `Ok(CycleReport::Seeded)` - First listing for an unseeded store, no events
    /// - `Ok(CycleReport::Detected)` - Listing compared; persist and notify failures
    ///   are counted in the summary
    /// - `Err(WatchError::Fetch)` - Listing failed; snapshot left untouched
    pub async fn run_cycle(
        &mut self,
        db: &DatabaseConnection,
        source: &dyn ListingSource,
        sink: &dyn NotificationSink,
        fetch_timeout: Duration,
    ) -> Result<CycleReport, WatchError> {
        if !self.enabled {
            return Ok(CycleReport::Disabled);
        }

        let listing = fetch_listing(source, fetch_timeout).await?;

        if !self.store.is_seeded() {
            self.store.seed(listing);
            if let Err(e) = self.persist(db).await {
                tracing::error!("Failed to persist seeded snapshot, retrying next cycle: {}", e);
            }

            return Ok(CycleReport::Seeded {
                tracked_files: self.store.len(),
            });
        }

        let Detection {
            events,
            next_snapshot,
        } = detect(self.store.view(), &listing);
        self.store.replace(next_snapshot);

        let mut summary = CycleSummary::default();

        for event in &events {
            match event {
                ChangeEvent::Added { key, .. } => {
                    if self.notified.contains(key) {
                        tracing::debug!("Skipping announcement for {}, already announced", key);
                        summary.suppressed += 1;
                        continue;
                    }

                    summary.added += 1;
                    let result = sink.notify(event).await;
                    self.notified.insert(key);

                    if let Err(e) = result {
                        tracing::warn!("{}", e);
                        summary.notify_failures += 1;
                    }
                }
                ChangeEvent::Updated { .. } => {
                    summary.updated += 1;
                    if let Err(e) = sink.notify(event).await {
                        tracing::warn!("{}", e);
                        summary.notify_failures += 1;
                    }
                }
            }
        }

        if let Err(e) = self.persist(db).await {
            tracing::error!("{}", e);
            summary.persist_failed = true;
        }

        Ok(CycleReport::Detected(summary))
    }

    /// Switches notifications on.
    ///
    /// Re-seeds the snapshot from the current listing so files already in the folder
    /// are not reported, then persists the new state. The announced set is kept.
    ///
    /// # Returns
    /// - `Ok(WatchStatus)` - Enabled and persisted
    /// - `Err(WatchError::Fetch)` - Listing failed; the watcher is unchanged
    /// - `Err(WatchError::Persist)` - Enabled in memory, the write is retried on the
    ///   next cycle
    pub async fn enable(
        &mut self,
        db: &DatabaseConnection,
        source: &dyn ListingSource,
        fetch_timeout: Duration,
    ) -> Result<WatchStatus, WatchError> {
        let listing = fetch_listing(source, fetch_timeout).await?;

        self.store.seed(listing);
        self.set_enabled(true);
        self.persist(db).await?;

        tracing::info!(
            "Drive notifications enabled for folder {}, seeded with {} files",
            self.folder_id,
            self.store.len()
        );

        Ok(self.status())
    }

    /// Switches notifications off. The snapshot and announced set are kept.
    pub async fn disable(&mut self, db: &DatabaseConnection) -> Result<WatchStatus, WatchError> {
        self.set_enabled(false);
        self.persist(db).await?;

        tracing::info!("Drive notifications disabled for folder {}", self.folder_id);

        Ok(self.status())
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.enabled_dirty = true;
        }
    }

    /// Writes whatever changed since the last successful write.
    ///
    /// Each part is cleared only after its own write succeeds, so a failure leaves the
    /// rest queued for the next attempt.
    async fn persist(&mut self, db: &DatabaseConnection) -> Result<(), WatchError> {
        let watch_repo = DriveWatchRepository::new(db);

        if self.store.is_dirty() {
            watch_repo
                .save_snapshot(&self.folder_id, self.store.view())
                .await?;
            self.store.mark_persisted();
        }

        if self.enabled_dirty {
            watch_repo.set_enabled(&self.folder_id, self.enabled).await?;
            self.enabled_dirty = false;
        }

        if !self.notified.pending().is_empty() {
            AnnouncedFileRepository::new(db)
                .insert_many(self.notified.pending())
                .await?;
            self.notified.clear_pending();
        }

        Ok(())
    }
}

async fn fetch_listing(
    source: &dyn ListingSource,
    fetch_timeout: Duration,
) -> Result<Vec<FileRecord>, WatchError> {
    match tokio::time::timeout(fetch_timeout, source.list_folder()).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(DriveError::Timeout(fetch_timeout).into()),
    }
}
