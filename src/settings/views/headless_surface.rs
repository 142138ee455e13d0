//! # Headless Surface
//!
//! Reference [`ViewSurface`] without a UI toolkit behind it. It keeps a
//! pool of at most `capacity` slots covering a viewport of rows, tracks the
//! live position of every slot and recycles slots the way a virtualized
//! list does: rows that scroll out or get removed free their slot, and the
//! next layout pass rebinds that same slot to another row.
//!
//! Notifications only update positions. Binding new rows is deferred to
//! [`HeadlessSurface::layout`], which mirrors a real renderer's layout pass.

use super::slot::{Slot, SlotId};
use super::view_surface::ViewSurface;
use crate::settings::events::ViewEvent;
use crate::settings::models::{EntryId, StoreError};
use crate::settings::view_models::RecyclingBinder;
use std::cell::RefCell;

/// Default number of rows kept on screen
pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug)]
struct PooledSlot {
    slot: Slot,
    position: Option<usize>,
}

#[derive(Debug, Default)]
struct SurfaceState {
    pool: Vec<PooledSlot>,
    first_visible: usize,
    events: Vec<ViewEvent>,
}

impl SurfaceState {
    fn find(&self, slot: SlotId) -> Option<&PooledSlot> {
        self.pool.iter().find(|pooled| pooled.slot.id() == slot)
    }

    fn find_mut(&mut self, slot: SlotId) -> Option<&mut PooledSlot> {
        self.pool.iter_mut().find(|pooled| pooled.slot.id() == slot)
    }
}

/// In-memory recycling list surface
#[derive(Debug)]
pub struct HeadlessSurface {
    capacity: usize,
    state: RefCell<SurfaceState>,
}

impl HeadlessSurface {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: RefCell::new(SurfaceState::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn first_visible(&self) -> usize {
        self.state.borrow().first_visible
    }

    /// Slots created so far, bound or not
    pub fn slot_ids(&self) -> Vec<SlotId> {
        self.state
            .borrow()
            .pool
            .iter()
            .map(|pooled| pooled.slot.id())
            .collect()
    }

    /// Slot currently showing row `position`
    pub fn slot_for_position(&self, position: usize) -> Option<SlotId> {
        self.state
            .borrow()
            .pool
            .iter()
            .find(|pooled| pooled.position == Some(position))
            .map(|pooled| pooled.slot.id())
    }

    /// Text shown in `slot`'s input field
    pub fn displayed_text(&self, slot: SlotId) -> Option<String> {
        let state = self.state.borrow();
        state
            .find(slot)
            .map(|pooled| pooled.slot.input().text().to_string())
    }

    pub fn bound_entry(&self, slot: SlotId) -> Option<EntryId> {
        let state = self.state.borrow();
        state.find(slot).and_then(|pooled| pooled.slot.bound_entry())
    }

    pub fn listener_count(&self, slot: SlotId) -> usize {
        let state = self.state.borrow();
        state
            .find(slot)
            .map_or(0, |pooled| pooled.slot.input().listener_count())
    }

    /// Rows on screen as (position, displayed text), in position order
    pub fn visible_rows(&self) -> Vec<(usize, String)> {
        let state = self.state.borrow();
        let mut rows: Vec<(usize, String)> = state
            .pool
            .iter()
            .filter_map(|pooled| {
                pooled
                    .position
                    .map(|position| (position, pooled.slot.input().text().to_string()))
            })
            .collect();
        rows.sort_by_key(|(position, _)| *position);
        rows
    }

    /// Notifications received so far
    pub fn events(&self) -> Vec<ViewEvent> {
        self.state.borrow().events.clone()
    }

    /// Drain the recorded notifications
    pub fn take_events(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.state.borrow_mut().events)
    }

    /// Move the viewport so it starts at row `first`. Slots leaving the
    /// viewport are released for reuse; call [`Self::layout`] afterwards.
    pub fn scroll_to(&self, first: usize) {
        let mut state = self.state.borrow_mut();
        state.first_visible = first;
        let end = first.saturating_add(self.capacity);
        for pooled in &mut state.pool {
            if matches!(pooled.position, Some(p) if p < first || p >= end) {
                pooled.position = None;
            }
        }
    }

    /// Bind every visible row that has no slot yet. Free slots are reused
    /// before new ones are created. Returns how many binds were issued.
    pub fn layout<V>(&self, binder: &RecyclingBinder<V>) -> Result<usize, StoreError>
    where
        V: ViewSurface + 'static,
    {
        let count = binder.item_count();
        let mut state = self.state.borrow_mut();
        let first = state.first_visible.min(count);
        let end = first.saturating_add(self.capacity).min(count);

        for pooled in &mut state.pool {
            if matches!(pooled.position, Some(p) if p < first || p >= end) {
                pooled.position = None;
            }
        }

        let mut binds = 0;
        for position in first..end {
            if state
                .pool
                .iter()
                .any(|pooled| pooled.position == Some(position))
            {
                continue;
            }

            let free = state.pool.iter().position(|pooled| pooled.position.is_none());
            let index = match free {
                Some(index) => index,
                None => {
                    let id = SlotId::new(state.pool.len());
                    state.pool.push(PooledSlot {
                        slot: Slot::new(id),
                        position: None,
                    });
                    state.pool.len() - 1
                }
            };

            let pooled = &mut state.pool[index];
            binder.on_bind(&mut pooled.slot, position)?;
            pooled.position = Some(position);
            binds += 1;
        }

        tracing::debug!("layout bound {} rows in {}..{}", binds, first, end);
        Ok(binds)
    }

    /// Simulate the user replacing the text of `slot`
    pub fn type_into(&self, slot: SlotId, text: &str) -> bool {
        let mut state = self.state.borrow_mut();
        match state.find_mut(slot) {
            Some(pooled) => {
                pooled.slot.input_mut().user_edit(text);
                true
            }
            None => false,
        }
    }

    /// Simulate a tap on `slot`'s delete control. Returns false when the
    /// slot does not exist or has no handler.
    pub fn click_delete(&self, slot: SlotId) -> bool {
        let handler = {
            let state = self.state.borrow();
            state
                .find(slot)
                .and_then(|pooled| pooled.slot.delete_control().handler())
        };
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ViewSurface for HeadlessSurface {
    fn current_position(&self, slot: SlotId) -> Option<usize> {
        self.state.borrow().find(slot).and_then(|pooled| pooled.position)
    }

    fn notify_inserted(&self, position: usize) {
        let mut state = self.state.borrow_mut();
        for pooled in &mut state.pool {
            if let Some(p) = pooled.position.as_mut() {
                if *p >= position {
                    *p += 1;
                }
            }
        }
        state.events.push(ViewEvent::ItemInserted { position });
    }

    fn notify_removed(&self, position: usize) {
        let mut state = self.state.borrow_mut();
        for pooled in &mut state.pool {
            match pooled.position {
                Some(p) if p == position => pooled.position = None,
                Some(p) if p > position => pooled.position = Some(p - 1),
                _ => {}
            }
        }
        state.events.push(ViewEvent::ItemRemoved { position });
    }

    fn notify_all_changed(&self) {
        let mut state = self.state.borrow_mut();
        for pooled in &mut state.pool {
            pooled.position = None;
        }
        state.events.push(ViewEvent::DataSetChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn surface_with(
        urls: &[&str],
        capacity: usize,
    ) -> (Rc<HeadlessSurface>, RecyclingBinder<HeadlessSurface>) {
        let surface = Rc::new(HeadlessSurface::new(capacity));
        let binder = RecyclingBinder::new(Rc::clone(&surface));
        binder.set_urls(urls.iter().copied());
        surface.layout(&binder).unwrap();
        surface.take_events();
        (surface, binder)
    }

    #[test]
    fn layout_should_bind_visible_rows_only() {
        let (surface, _binder) = surface_with(&["a", "b", "c", "d"], 2);

        assert_eq!(surface.slot_ids().len(), 2);
        assert_eq!(
            surface.visible_rows(),
            vec![(0, "a".to_string()), (1, "b".to_string())]
        );
    }

    #[test]
    fn scrolling_should_recycle_slots() {
        let (surface, binder) = surface_with(&["a", "b", "c", "d"], 2);
        let before = surface.slot_ids();

        surface.scroll_to(2);
        assert_eq!(surface.layout(&binder).unwrap(), 2);

        assert_eq!(surface.slot_ids(), before);
        assert_eq!(
            surface.visible_rows(),
            vec![(2, "c".to_string()), (3, "d".to_string())]
        );
        for slot in before {
            assert_eq!(surface.listener_count(slot), 1);
        }
    }

    #[test]
    fn scrolling_past_the_end_should_leave_nothing_to_bind() {
        let (surface, binder) = surface_with(&["a", "b", "c"], 4);

        surface.scroll_to(usize::MAX);
        assert_eq!(surface.layout(&binder).unwrap(), 0);
        assert!(surface.visible_rows().is_empty());

        surface.scroll_to(1);
        assert_eq!(surface.layout(&binder).unwrap(), 2);
        assert_eq!(
            surface.visible_rows(),
            vec![(1, "b".to_string()), (2, "c".to_string())]
        );
    }

    #[test]
    fn insert_notification_should_shift_positions() {
        let (surface, _binder) = surface_with(&["a", "b"], 4);
        let slot_b = surface.slot_for_position(1).unwrap();

        surface.notify_inserted(0);

        assert_eq!(surface.current_position(slot_b), Some(2));
        assert_eq!(surface.events(), vec![ViewEvent::ItemInserted { position: 0 }]);
    }

    #[test]
    fn remove_notification_should_free_slot_and_shift_rest() {
        let (surface, _binder) = surface_with(&["a", "b", "c"], 4);
        let slot_a = surface.slot_for_position(0).unwrap();
        let slot_c = surface.slot_for_position(2).unwrap();

        surface.notify_removed(0);

        assert_eq!(surface.current_position(slot_a), None);
        assert_eq!(surface.current_position(slot_c), Some(1));
    }

    #[test]
    fn all_changed_should_unbind_every_slot() {
        let (surface, _binder) = surface_with(&["a", "b"], 4);

        surface.notify_all_changed();

        for slot in surface.slot_ids() {
            assert_eq!(surface.current_position(slot), None);
        }
        assert!(surface.visible_rows().is_empty());
    }

    #[test]
    fn click_on_unknown_slot_should_report_false() {
        let (surface, _binder) = surface_with(&["a"], 1);
        assert!(!surface.click_delete(SlotId::new(42)));
        assert!(!surface.type_into(SlotId::new(42), "x"));
    }
}
