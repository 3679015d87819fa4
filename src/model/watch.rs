//! Persisted and reported state of the drive watcher.

use crate::model::drive_file::Snapshot;

/// Watcher state as stored in the `drive_watch` table.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveWatchState {
    pub folder_id: String,
    pub enabled: bool,
    /// `None` when the folder has never been seeded or the stored blob is unreadable.
    pub snapshot: Option<Snapshot>,
    /// Parse error of a stored blob that could not be read back.
    pub corrupt_snapshot: Option<String>,
}

/// Point-in-time view of the watcher for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchStatus {
    pub enabled: bool,
    pub seeded: bool,
    pub tracked_files: usize,
    pub announced_files: usize,
}

/// What a single polling cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// Notifications are switched off; nothing was fetched.
    Disabled,
    /// The store had never been seeded and was seeded from this listing.
    Seeded { tracked_files: usize },
    /// The listing was compared against the snapshot.
    Detected(CycleSummary),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleSummary {
    pub added: usize,
    pub updated: usize,
    /// Added events skipped because the key had already been announced.
    pub suppressed: usize,
    pub notify_failures: usize,
    /// Whether writing state failed; the write is retried next cycle.
    pub persist_failed: bool,
}

impl CycleSummary {
    pub fn has_changes(&self) -> bool {
        self.added > 0 || self.updated > 0
    }
}
