//! In-memory holder of the last known state of the watched folder.

use crate::model::drive_file::{FileRecord, Snapshot};

/// Last known state of the watched folder.
///
/// Tracks whether the store has ever been seeded (a brand new store must be seeded
/// before detection, otherwise every pre-existing file would be reported as added)
/// and whether it holds changes not yet written to the database.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    snapshot: Snapshot,
    seeded: bool,
    dirty: bool,
}

impl SnapshotStore {
    /// Creates an empty store that still needs seeding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from a persisted snapshot. It counts as seeded and clean.
    pub fn restore(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            seeded: true,
            dirty: false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&FileRecord> {
        self.snapshot.get(key)
    }

    /// Inserts or overwrites the record stored under `record.key`.
    pub fn put(&mut self, record: FileRecord) {
        self.snapshot.insert(record);
        self.dirty = true;
    }

    /// Copy of the full mapping, suitable for persisting.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Borrowed view of the full mapping.
    pub fn view(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Replaces the whole contents with `listing` without producing any events.
    ///
    /// Duplicate keys resolve to the last record.
    pub fn seed(&mut self, listing: Vec<FileRecord>) {
        self.snapshot = Snapshot::from_listing(listing);
        self.seeded = true;
        self.dirty = true;
    }

    /// Swaps in the snapshot computed by a detection pass.
    pub fn replace(&mut self, next: Snapshot) {
        if next != self.snapshot {
            self.snapshot = next;
            self.dirty = true;
        }
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Whether the store holds changes that were not persisted yet.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_persisted(&mut self) {
        self.dirty = false;
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }
}
