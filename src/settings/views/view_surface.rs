//! # View Surface
//!
//! Contract the virtualized list renderer fulfils for the binder. The
//! surface owns the slot pool, calls back into the binder to bind rows and
//! answers live-position queries at the moment an action happens.
//!
//! All methods take `&self`: the surface is shared between the binder and
//! the handlers installed on its own slots, so implementations keep their
//! mutable state behind interior mutability and must not hold a borrow
//! while invoking slot handlers.

use super::slot::SlotId;

pub trait ViewSurface {
    /// Position of the row `slot` displays right now, `None` when the slot
    /// is not bound to a live row (recycled, removed or awaiting layout)
    fn current_position(&self, slot: SlotId) -> Option<usize>;

    /// One row was inserted at `position`
    fn notify_inserted(&self, position: usize);

    /// One row was removed from `position`
    fn notify_removed(&self, position: usize);

    /// The whole collection changed
    fn notify_all_changed(&self);
}
