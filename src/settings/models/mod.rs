//! # Models
//!
//! Pure data: the entry record and the ordered store holding it.

pub mod entry;
pub mod entry_store;

pub use entry::{Entry, EntryId, EntryRef};
pub use entry_store::{EntryStore, StoreError};
