//! Change events produced by comparing a listing against a snapshot.

use crate::model::drive_file::{FileRecord, Snapshot};

/// A difference between the remembered snapshot and a fresh listing.
///
/// There is no `Removed` variant: files that disappear from the folder stay in
/// the snapshot untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Added {
        key: String,
        record: FileRecord,
    },
    Updated {
        key: String,
        old: FileRecord,
        new: FileRecord,
    },
}

impl ChangeEvent {
    pub fn key(&self) -> &str {
        match self {
            Self::Added { key, .. } | Self::Updated { key, .. } => key,
        }
    }

    /// The record as currently listed.
    pub fn current(&self) -> &FileRecord {
        match self {
            Self::Added { record, .. } => record,
            Self::Updated { new, .. } => new,
        }
    }
}

/// Output of one detection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Events in listing order.
    pub events: Vec<ChangeEvent>,
    /// Snapshot to remember for the next cycle.
    pub next_snapshot: Snapshot,
}
