//! # Event Bus
//!
//! Observer registry for store events. The binder publishes every
//! structural change here after the view surface has been notified.

use super::store_events::StoreEvent;
use std::rc::Rc;

/// Type alias for store event handlers to reduce complexity
pub type StoreEventHandler = Rc<dyn Fn(&StoreEvent)>;

/// Event bus for decoupled communication between components
pub trait EventBus {
    /// Publish a store event
    fn publish_store_event(&self, event: &StoreEvent);

    /// Subscribe to store events
    fn subscribe_to_store_events(&mut self, handler: StoreEventHandler);
}

/// Simple in-memory event bus implementation. Cloning copies the handler
/// list, so a clone can publish while the original takes new subscribers.
#[derive(Clone)]
pub struct SimpleEventBus {
    store_handlers: Vec<StoreEventHandler>,
}

impl SimpleEventBus {
    pub fn new() -> Self {
        Self {
            store_handlers: Vec::new(),
        }
    }
}

impl Default for SimpleEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus for SimpleEventBus {
    fn publish_store_event(&self, event: &StoreEvent) {
        for handler in &self.store_handlers {
            handler(event);
        }
    }

    fn subscribe_to_store_events(&mut self, handler: StoreEventHandler) {
        self.store_handlers.push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::models::EntryId;
    use std::cell::RefCell;

    #[test]
    fn event_bus_should_deliver_store_events() {
        let mut bus = SimpleEventBus::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let received_clone = received.clone();

        bus.subscribe_to_store_events(Rc::new(move |event| {
            received_clone.borrow_mut().push(event.clone());
        }));

        let event = StoreEvent::Inserted {
            position: 0,
            id: EntryId::new(),
        };
        bus.publish_store_event(&event);

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], event);
    }

    #[test]
    fn event_bus_should_handle_multiple_subscribers() {
        let mut bus = SimpleEventBus::new();
        let counter = Rc::new(RefCell::new(0));

        for _ in 0..2 {
            let counter = counter.clone();
            bus.subscribe_to_store_events(Rc::new(move |_| {
                *counter.borrow_mut() += 1;
            }));
        }

        bus.publish_store_event(&StoreEvent::Reset { len: 3 });

        assert_eq!(*counter.borrow(), 2);
    }
}
