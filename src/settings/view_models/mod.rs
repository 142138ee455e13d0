//! # View Models
//!
//! Coordination between the entry store and the view surface.

pub mod recycling_binder;

pub use recycling_binder::{DeleteOutcome, RecyclingBinder};
