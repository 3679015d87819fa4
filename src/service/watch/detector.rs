//! Comparison of a fresh folder listing against the remembered snapshot.

use std::collections::HashMap;

use crate::model::{
    change::{ChangeEvent, Detection},
    drive_file::{FileRecord, Snapshot},
};

/// Compares `listing` against `previous` and returns the change events together
/// with the snapshot to remember next.
///
/// A listed key missing from `previous` is `Added`. A known key whose modification
/// marker or size differs is `Updated`; either signal is enough. Keys that are no
/// longer listed are carried over unchanged and produce no event.
///
/// Events follow listing order. If the listing repeats a key, the last occurrence
/// wins and the event is emitted at the position of the first occurrence.
///
/// There is no special case for an empty `previous`: callers must seed a new store
/// instead of detecting against it.
pub fn detect(previous: &Snapshot, listing: &[FileRecord]) -> Detection {
    let mut order: Vec<&str> = Vec::with_capacity(listing.len());
    let mut latest: HashMap<&str, &FileRecord> = HashMap::with_capacity(listing.len());
    for record in listing {
        if latest.insert(record.key.as_str(), record).is_none() {
            order.push(record.key.as_str());
        }
    }

    let mut next_snapshot = previous.clone();
    let mut events = Vec::new();

    for key in order {
        let record = latest[key];

        match previous.get(key) {
            None => events.push(ChangeEvent::Added {
                key: key.to_string(),
                record: record.clone(),
            }),
            Some(old) if has_changed(old, record) => events.push(ChangeEvent::Updated {
                key: key.to_string(),
                old: old.clone(),
                new: record.clone(),
            }),
            Some(_) => {}
        }

        next_snapshot.insert(record.clone());
    }

    Detection {
        events,
        next_snapshot,
    }
}

fn has_changed(old: &FileRecord, new: &FileRecord) -> bool {
    old.modified_at != new.modified_at || old.size_bytes != new.size_bytes
}
