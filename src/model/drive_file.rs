//! Remote file records and the snapshot of a watched folder.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One file in the watched Drive folder, as last observed.
///
/// `key` is the identity used across polling cycles. `remote_id` is only used to
/// download the file and never takes part in comparisons, and neither does
/// `created_at`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// File name, unique within a snapshot.
    pub key: String,
    /// Drive file ID.
    pub remote_id: String,
    /// Drive `modifiedTime`, compared literally.
    pub modified_at: String,
    /// Byte size. Drive omits sizes for some files; those are recorded as `0`.
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FileRecord {
    /// Steam AppID encoded in the file name (`"730.zip"` -> `"730"`).
    pub fn appid(&self) -> &str {
        self.key.strip_suffix(".zip").unwrap_or(&self.key)
    }

    /// Size in whole kibibytes, as shown to users.
    pub fn size_kb(&self) -> u64 {
        self.size_bytes / 1024
    }
}

/// Remembered state of every tracked file, keyed by [`FileRecord::key`].
///
/// Holds at most one record per key. Serialized as a plain JSON object so the whole
/// snapshot can be persisted as a single blob.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Snapshot {
    files: HashMap<String, FileRecord>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from a listing. Duplicate keys resolve to the last record.
    pub fn from_listing(listing: impl IntoIterator<Item = FileRecord>) -> Self {
        let mut snapshot = Self::new();
        for record in listing {
            snapshot.insert(record);
        }
        snapshot
    }

    pub fn get(&self, key: &str) -> Option<&FileRecord> {
        self.files.get(key)
    }

    /// Inserts or overwrites the record stored under `record.key`.
    pub fn insert(&mut self, record: FileRecord) -> Option<FileRecord> {
        self.files.insert(record.key.clone(), record)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}
