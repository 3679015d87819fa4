use crate::{
    data::drive_watch::DriveWatchRepository,
    model::drive_file::{FileRecord, Snapshot},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod load;
mod save_snapshot;
mod set_enabled;

fn record(key: &str, size_bytes: u64) -> FileRecord {
    FileRecord {
        key: key.to_string(),
        remote_id: format!("drive-{}", key),
        modified_at: "2025-03-01T10:00:00.000Z".to_string(),
        size_bytes,
        created_at: Some("2025-02-01T10:00:00.000Z".to_string()),
    }
}
