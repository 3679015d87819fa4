use thiserror::Error;

use crate::error::drive::DriveError;

/// Failures scoped to a single drive watch cycle.
///
/// None of these are fatal: a fetch failure skips the cycle, a persist failure is
/// retried on the next cycle and a notify failure only affects one event.
#[derive(Error, Debug)]
pub enum WatchError {
    /// The folder listing could not be retrieved; nothing was changed.
    #[error("Failed to fetch folder listing: {0}")]
    Fetch(#[from] DriveError),

    /// Writing watcher state to the database failed; in-memory state is kept.
    #[error("Failed to persist watcher state: {0}")]
    Persist(#[from] sea_orm::DbErr),

    /// Delivering a change notification failed for one file.
    #[error("Failed to deliver notification for '{key}': {reason}")]
    Notify {
        /// File key the event was about
        key: String,
        /// Human-readable failure summary
        reason: String,
    },
}
