//! # View Events
//!
//! Structural notifications as seen from the view surface side.
//! The headless surface records one of these per notification it receives.

/// Notification a view surface received from the binder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// One row was inserted at `position`
    ItemInserted { position: usize },

    /// One row was removed from `position`
    ItemRemoved { position: usize },

    /// Everything changed, all rows must be rebound
    DataSetChanged,
}
