//! # Entry Model
//!
//! One configured connection target. The `url` field is written directly
//! by slot listeners through a shared [`EntryRef`] handle.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier assigned to an entry when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Editable URL record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    id: EntryId,
    pub url: String,
}

impl Entry {
    /// Create an entry with a fresh id. Any text is accepted, including empty.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    /// Same url under a newly generated id
    pub(crate) fn with_fresh_id(self) -> Self {
        Self {
            id: EntryId::new(),
            url: self.url,
        }
    }
}

/// Shared handle to an entry owned by the store
pub type EntryRef = Rc<RefCell<Entry>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entries_should_get_distinct_ids() {
        let a = Entry::new("ws://a");
        let b = Entry::new("ws://a");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.url, b.url);
    }

    #[test]
    fn clone_should_keep_id() {
        let a = Entry::new("ws://a");
        assert_eq!(a.clone().id(), a.id());
    }

    #[test]
    fn fresh_id_should_keep_url() {
        let a = Entry::new("ws://a");
        let b = a.clone().with_fresh_id();
        assert_ne!(a.id(), b.id());
        assert_eq!(b.url, "ws://a");
    }

    #[test]
    fn entry_without_id_should_deserialize() {
        let entry: Entry = serde_json::from_str(r#"{"url":"ws://x:9005"}"#).unwrap();
        assert_eq!(entry.url, "ws://x:9005");
    }
}
