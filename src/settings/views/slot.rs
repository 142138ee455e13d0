//! # Item Slot
//!
//! A recyclable row view: a URL text field, a delete control and the
//! binding to whichever entry it currently shows.

use super::text_input::{ListenerGuard, TextInput};
use crate::settings::models::EntryId;
use std::fmt;
use std::rc::Rc;

/// Identifier of a slot within its view surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

/// Handler run when the delete control is activated
pub type DeleteHandler = Rc<dyn Fn()>;

/// Delete button of a slot; holds at most one handler
#[derive(Default)]
pub struct DeleteControl {
    handler: Option<DeleteHandler>,
}

impl DeleteControl {
    /// Install `handler`, replacing any previous one
    pub fn set_handler(&mut self, handler: DeleteHandler) {
        self.handler = Some(handler);
    }

    /// Remove the installed handler, if any
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Clone of the installed handler, for invoking it outside any borrow
    pub fn handler(&self) -> Option<DeleteHandler> {
        self.handler.clone()
    }

    /// Run the handler. Returns false when none is installed.
    pub fn click(&self) -> bool {
        match self.handler() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for DeleteControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeleteControl")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

/// Association between a slot and the entry it displays
#[derive(Debug)]
pub struct SlotBinding {
    entry_id: EntryId,
    _listener: ListenerGuard,
}

impl SlotBinding {
    pub fn new(entry_id: EntryId, listener: ListenerGuard) -> Self {
        Self {
            entry_id,
            _listener: listener,
        }
    }

    pub fn entry_id(&self) -> EntryId {
        self.entry_id
    }
}

/// Recyclable row view
#[derive(Debug)]
pub struct Slot {
    id: SlotId,
    input: TextInput,
    delete: DeleteControl,
    binding: Option<SlotBinding>,
}

impl Slot {
    pub fn new(id: SlotId) -> Self {
        Self {
            id,
            input: TextInput::new(),
            delete: DeleteControl::default(),
            binding: None,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    pub fn delete_control(&self) -> &DeleteControl {
        &self.delete
    }

    pub fn delete_control_mut(&mut self) -> &mut DeleteControl {
        &mut self.delete
    }

    /// Entry this slot was last bound to
    pub fn bound_entry(&self) -> Option<EntryId> {
        self.binding.as_ref().map(SlotBinding::entry_id)
    }

    /// Release the current binding, detach its text listener and clear
    /// the delete handler
    pub fn unbind(&mut self) -> Option<EntryId> {
        self.delete.clear_handler();
        self.binding.take().map(|binding| binding.entry_id)
    }

    /// Record a new binding. The previous one, with its listener, is
    /// dropped; the delete handler is left as installed.
    pub fn set_binding(&mut self, binding: SlotBinding) {
        self.binding = Some(binding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn click_without_handler_should_report_false() {
        let control = DeleteControl::default();
        assert!(!control.click());
    }

    #[test]
    fn set_handler_should_replace_previous() {
        let mut control = DeleteControl::default();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let first_clone = first.clone();
        control.set_handler(Rc::new(move || first_clone.set(first_clone.get() + 1)));
        let second_clone = second.clone();
        control.set_handler(Rc::new(move || second_clone.set(second_clone.get() + 1)));

        assert!(control.click());
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn unbind_should_detach_listener() {
        let mut slot = Slot::new(SlotId::new(0));
        let entry_id = EntryId::new();
        let guard = slot.input_mut().attach(|_| {});
        slot.set_binding(SlotBinding::new(entry_id, guard));
        assert_eq!(slot.input().listener_count(), 1);

        assert_eq!(slot.unbind(), Some(entry_id));
        assert_eq!(slot.input().listener_count(), 0);
        assert_eq!(slot.bound_entry(), None);
    }

    #[test]
    fn unbind_should_clear_delete_handler() {
        let mut slot = Slot::new(SlotId::new(0));
        let clicks = Rc::new(Cell::new(0));
        let clicks_clone = clicks.clone();
        slot.delete_control_mut()
            .set_handler(Rc::new(move || clicks_clone.set(clicks_clone.get() + 1)));
        let guard = slot.input_mut().attach(|_| {});
        slot.set_binding(SlotBinding::new(EntryId::new(), guard));

        slot.unbind();

        assert!(!slot.delete_control().has_handler());
        assert!(!slot.delete_control().click());
        assert_eq!(clicks.get(), 0);
    }

    #[test]
    fn slot_id_should_display_index() {
        assert_eq!(SlotId::new(4).to_string(), "slot#4");
    }
}
