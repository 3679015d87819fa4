//! Keys whose "added" announcement has already gone out.

use std::collections::HashSet;

/// Set of keys announced as added at least once.
///
/// Survives snapshot re-seeding so that switching notifications off and on does not
/// announce old files again. Entries are never removed. Keys inserted since the last
/// successful write are tracked as pending until persisted.
#[derive(Debug, Default)]
pub struct NotifiedSet {
    keys: HashSet<String>,
    pending: Vec<String>,
}

impl NotifiedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the set from persisted keys; nothing is pending.
    pub fn from_keys(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            pending: Vec::new(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Records `key` as announced. Returns `false` if it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.keys.insert(key.to_string()) {
            self.pending.push(key.to_string());
            true
        } else {
            false
        }
    }

    /// Keys not yet written to the database.
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}
