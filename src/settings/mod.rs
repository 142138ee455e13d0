//! # Server List Settings
//!
//! Editable list of server URLs shown through a recycling view surface.
//! Models hold the data, the binder keeps slots and data in step, views
//! define the slot primitives and the surface contract.

pub mod controller;
pub mod events;
pub mod models;
pub mod view_models;
pub mod views;

pub use controller::SettingsController;
pub use events::{StoreEvent, ViewEvent};
pub use models::{Entry, EntryId, EntryRef, EntryStore, StoreError};
pub use view_models::{DeleteOutcome, RecyclingBinder};
pub use views::{HeadlessSurface, Slot, SlotId, TextInput, ViewSurface};
