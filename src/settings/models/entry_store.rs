//! # Entry Store
//!
//! Ordered collection of editable entries, the single source of truth for
//! the list. Keeps an id to position index next to the sequence so callers
//! can route work by identity instead of by a possibly stale index.
//!
//! Structural operations return the [`StoreEvent`] describing the change,
//! leaving notification to the caller.

use super::entry::{Entry, EntryId, EntryRef};
use crate::settings::events::StoreEvent;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Errors reported by structural store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("position {position} is out of range for {len} entries")]
    OutOfRange { position: usize, len: usize },
}

#[derive(Debug)]
struct Record {
    id: EntryId,
    entry: EntryRef,
}

/// Ordered entry collection with an id index
#[derive(Debug, Default)]
pub struct EntryStore {
    records: Vec<Record>,
    positions: HashMap<EntryId, usize>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replace the whole collection with `entries`, in order
    pub fn set_all<I>(&mut self, entries: I) -> StoreEvent
    where
        I: IntoIterator<Item = Entry>,
    {
        self.records.clear();
        self.positions.clear();
        for entry in entries {
            self.push(entry);
        }
        StoreEvent::Reset {
            len: self.records.len(),
        }
    }

    /// Independent copy of every entry in display order
    pub fn snapshot_all(&self) -> Vec<Entry> {
        self.records
            .iter()
            .map(|record| record.entry.borrow().clone())
            .collect()
    }

    /// Current url values in display order
    pub fn urls(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.entry.borrow().url.clone())
            .collect()
    }

    /// Add `entry` at the end
    pub fn append(&mut self, entry: Entry) -> StoreEvent {
        let id = self.push(entry);
        StoreEvent::Inserted {
            position: self.records.len() - 1,
            id,
        }
    }

    /// Remove the entry currently at `position`
    pub fn remove_at(&mut self, position: usize) -> Result<StoreEvent, StoreError> {
        if position >= self.records.len() {
            return Err(StoreError::OutOfRange {
                position,
                len: self.records.len(),
            });
        }

        let removed = self.records.remove(position);
        self.positions.remove(&removed.id);
        self.reindex_from(position);

        Ok(StoreEvent::Removed {
            position,
            id: removed.id,
        })
    }

    /// Shared handle to the entry at `position`
    pub fn entry_at(&self, position: usize) -> Option<EntryRef> {
        self.records
            .get(position)
            .map(|record| Rc::clone(&record.entry))
    }

    /// Current index of the entry with `id`
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    fn push(&mut self, entry: Entry) -> EntryId {
        // ids must stay unique, e.g. when one snapshot entry is passed twice
        let entry = if self.positions.contains_key(&entry.id()) {
            entry.with_fresh_id()
        } else {
            entry
        };
        let id = entry.id();
        self.positions.insert(id, self.records.len());
        self.records.push(Record {
            id,
            entry: Rc::new(RefCell::new(entry)),
        });
        id
    }

    fn reindex_from(&mut self, start: usize) {
        for (offset, record) in self.records[start..].iter().enumerate() {
            self.positions.insert(record.id, start + offset);
        }
    }
}
