//! # wsurls - Editable Server URL List
//!
//! The server list of a voice client's settings screen: an ordered list of
//! WebSocket URLs the user can append to, edit in place and delete from,
//! displayed through a virtualized list that recycles its row views.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  bind / live position  ┌──────────────────┐  set_all / append  ┌────────────┐
//! │ View Surface │───────────────────────►│ RecyclingBinder  │───────────────────►│ EntryStore │
//! │              │◄───────────────────────│                  │◄───────────────────│            │
//! │ - slot pool  │  insert / remove /     │ - listeners      │    StoreEvent      │ - entries  │
//! │ - layout     │  full refresh          │ - delete routing │                    │ - id index │
//! └──────────────┘                        └──────────────────┘                    └────────────┘
//! ```
//!
//! Slot listeners write straight into the entry they were bound to. Delete
//! requests carry the entry id and are resolved against the store only when
//! the user taps, so rows shifted by earlier removals are never confused.

pub mod cmd_args;
pub mod config;
pub mod profile;
pub mod settings;

// Re-export main types for easy access
pub use profile::{IniSettingsStore, ProfileSettings};
pub use settings::*;
