//! # Text Input
//!
//! Editable text field of an item slot. Programmatic updates and user
//! edits are separate entry points: only user edits reach listeners.
//!
//! Listeners are owned by [`ListenerGuard`]s. Dropping a guard detaches its
//! listener, so whoever holds the guard controls the listener's lifetime.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Callback fired with the new text after every user edit
pub type TextChangeListener = Rc<dyn Fn(&str)>;

/// Type alias for the shared listener list to reduce complexity
type ListenerRegistry = Rc<RefCell<Vec<(u64, TextChangeListener)>>>;

/// Text field with a listener registry
pub struct TextInput {
    text: String,
    listeners: ListenerRegistry,
    next_listener_id: u64,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener_id: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the displayed text without notifying listeners
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replace the text as the user would and notify every listener
    pub fn user_edit(&mut self, text: impl Into<String>) {
        self.text = text.into();

        // Clone out so a listener may attach or detach without a borrow conflict
        let listeners: Vec<TextChangeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&self.text);
        }
    }

    /// Attach `listener`; it stays active until the returned guard is dropped
    pub fn attach<F>(&mut self, listener: F) -> ListenerGuard
    where
        F: Fn(&str) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.borrow_mut().push((id, Rc::new(listener)));

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of currently attached listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("text", &self.text)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Ownership token for an attached listener
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Vec<(u64, TextChangeListener)>>>,
}

impl ListenerGuard {
    /// Detach the listener now
    pub fn detach(self) {}
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .retain(|(listener_id, _)| *listener_id != self.id);
        }
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}
