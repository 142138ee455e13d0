//! # Events Module
//!
//! Store events (what changed in the data) and view events (what the
//! view surface was told), plus the observer bus.

pub mod event_bus;
pub mod store_events;
pub mod view_events;

pub use event_bus::{EventBus, SimpleEventBus, StoreEventHandler};
pub use store_events::StoreEvent;
pub use view_events::ViewEvent;
