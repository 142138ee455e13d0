//! # Store Events
//!
//! Events returned by the entry store when its structure changes.
//! Field edits on an entry never produce one of these.

use crate::settings::models::EntryId;

/// Structural change to the entry store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// An entry was appended at `position`
    Inserted { position: usize, id: EntryId },

    /// The entry `id` was removed from `position`
    Removed { position: usize, id: EntryId },

    /// The whole collection was replaced and now holds `len` entries
    Reset { len: usize },
}

impl StoreEvent {
    /// Index the change happened at, `None` for a full reset
    pub fn position(&self) -> Option<usize> {
        match self {
            StoreEvent::Inserted { position, .. } | StoreEvent::Removed { position, .. } => {
                Some(*position)
            }
            StoreEvent::Reset { .. } => None,
        }
    }
}
