//! # Recycling Binder
//!
//! Keeps the entry store and a pool of recycled slots in step.
//!
//! Binding a slot always runs the same sequence: release the previous
//! binding (which detaches its text listener), show the entry's url without
//! notifying anyone, attach a listener closed over the entry handle, then
//! install a delete handler. The delete handler carries the entry id, not
//! the bind-time position, and resolves the row to remove only when it is
//! activated.
//!
//! Every structural change produces exactly one notification on the view
//! surface: insert-at and remove-at for single rows, a full refresh only
//! for [`RecyclingBinder::set_all`].

use crate::settings::events::{EventBus, SimpleEventBus, StoreEvent, StoreEventHandler};
use crate::settings::models::{Entry, EntryId, EntryRef, EntryStore, StoreError};
use crate::settings::views::{DeleteHandler, Slot, SlotBinding, SlotId, ViewSurface};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What a delete request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entry was removed from `position`
    Removed { position: usize },
    /// The surface reported the slot as not showing a live row
    Unbound,
    /// The entry was no longer in the store
    AlreadyRemoved,
}

struct BinderState<V> {
    store: RefCell<EntryStore>,
    surface: Rc<V>,
    bus: RefCell<SimpleEventBus>,
}

impl<V: ViewSurface> BinderState<V> {
    /// Forward a store event to the surface, then to observers.
    /// Callers must not hold a store borrow. Observers run against a copy
    /// of the handler list and may subscribe from inside a handler.
    fn dispatch(&self, event: StoreEvent) {
        match &event {
            StoreEvent::Inserted { position, .. } => self.surface.notify_inserted(*position),
            StoreEvent::Removed { position, .. } => self.surface.notify_removed(*position),
            StoreEvent::Reset { .. } => self.surface.notify_all_changed(),
        }
        let bus = self.bus.borrow().clone();
        bus.publish_store_event(&event);
    }

    fn request_delete(&self, slot: SlotId, entry: EntryId) -> DeleteOutcome {
        let Some(live) = self.surface.current_position(slot) else {
            tracing::debug!("delete on {} ignored: slot has no live position", slot);
            return DeleteOutcome::Unbound;
        };

        let Some(position) = self.store.borrow().position_of(entry) else {
            tracing::debug!("delete on {} ignored: entry {} already removed", slot, entry);
            return DeleteOutcome::AlreadyRemoved;
        };

        if position != live {
            tracing::warn!(
                "{} reports position {} but entry {} is at {}; removing by entry",
                slot,
                live,
                entry,
                position
            );
        }

        let removed = self.store.borrow_mut().remove_at(position);
        match removed {
            Ok(event) => {
                self.dispatch(event);
                DeleteOutcome::Removed { position }
            }
            Err(e) => {
                tracing::debug!("delete on {} ignored: {}", slot, e);
                DeleteOutcome::AlreadyRemoved
            }
        }
    }
}

/// Binder between an [`EntryStore`] and a recycling [`ViewSurface`]
pub struct RecyclingBinder<V: ViewSurface + 'static> {
    state: Rc<BinderState<V>>,
}

impl<V: ViewSurface + 'static> Clone for RecyclingBinder<V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<V: ViewSurface + 'static> RecyclingBinder<V> {
    /// Create a binder with an empty store
    pub fn new(surface: Rc<V>) -> Self {
        Self {
            state: Rc::new(BinderState {
                store: RefCell::new(EntryStore::new()),
                surface,
                bus: RefCell::new(SimpleEventBus::new()),
            }),
        }
    }

    pub fn surface(&self) -> &Rc<V> {
        &self.state.surface
    }

    /// Row count reported to the surface
    pub fn item_count(&self) -> usize {
        self.state.store.borrow().len()
    }

    pub fn entry_at(&self, position: usize) -> Option<EntryRef> {
        self.state.store.borrow().entry_at(position)
    }

    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.state.store.borrow().position_of(id)
    }

    /// Independent copy of the list, for persistence
    pub fn snapshot_all(&self) -> Vec<Entry> {
        self.state.store.borrow().snapshot_all()
    }

    pub fn urls(&self) -> Vec<String> {
        self.state.store.borrow().urls()
    }

    /// Register an observer for store events
    pub fn subscribe(&self, handler: StoreEventHandler) {
        self.state.bus.borrow_mut().subscribe_to_store_events(handler);
    }

    /// Replace the whole list and request a full refresh
    pub fn set_all<I>(&self, entries: I)
    where
        I: IntoIterator<Item = Entry>,
    {
        let event = self.state.store.borrow_mut().set_all(entries);
        tracing::debug!("list reset: {:?}", event);
        self.state.dispatch(event);
    }

    /// Replace the whole list with new entries for `urls`
    pub fn set_urls<I, S>(&self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<Entry> = urls.into_iter().map(Entry::new).collect();
        self.set_all(entries);
    }

    /// Append `entry` and notify a single insertion. Returns its position.
    pub fn append(&self, entry: Entry) -> usize {
        let event = self.state.store.borrow_mut().append(entry);
        let position = event.position().unwrap_or_default();
        self.state.dispatch(event);
        position
    }

    /// Append a new entry holding `url`. Returns its position.
    pub fn add_url(&self, url: impl Into<String>) -> usize {
        self.append(Entry::new(url))
    }

    /// Remove the row at `position` and notify a single removal
    pub fn remove_at(&self, position: usize) -> Result<(), StoreError> {
        let event = self.state.store.borrow_mut().remove_at(position)?;
        self.state.dispatch(event);
        Ok(())
    }

    /// Bind `slot` to the entry at `position`. The slot is left untouched
    /// when `position` is out of range.
    pub fn on_bind(&self, slot: &mut Slot, position: usize) -> Result<(), StoreError> {
        let entry = {
            let store = self.state.store.borrow();
            store.entry_at(position).ok_or(StoreError::OutOfRange {
                position,
                len: store.len(),
            })?
        };
        self.bind_entry(slot, entry, position);
        Ok(())
    }

    /// Bind `slot` to `entry`. `position` is informational only; nothing
    /// installed on the slot captures it.
    pub fn bind_entry(&self, slot: &mut Slot, entry: EntryRef, position: usize) {
        if let Some(previous) = slot.unbind() {
            tracing::debug!("{} released entry {}", slot.id(), previous);
        }

        let (entry_id, url) = {
            let entry = entry.borrow();
            (entry.id(), entry.url.clone())
        };
        slot.input_mut().set_text(url);

        let listener = slot.input_mut().attach(move |text| {
            entry.borrow_mut().url = text.to_string();
        });

        let handler = self.delete_handler(slot.id(), entry_id);
        slot.delete_control_mut().set_handler(handler);
        slot.set_binding(SlotBinding::new(entry_id, listener));

        tracing::debug!("{} bound to entry {} at {}", slot.id(), entry_id, position);
    }

    /// Handle a delete request from `slot` for `entry`. Races with other
    /// removals are absorbed and reported through the outcome.
    pub fn on_request_delete(&self, slot: SlotId, entry: EntryId) -> DeleteOutcome {
        self.state.request_delete(slot, entry)
    }

    fn delete_handler(&self, slot: SlotId, entry: EntryId) -> DeleteHandler {
        let state: Weak<BinderState<V>> = Rc::downgrade(&self.state);
        Rc::new(move || {
            if let Some(state) = state.upgrade() {
                state.request_delete(slot, entry);
            }
        })
    }
}
