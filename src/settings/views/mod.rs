//! # Views
//!
//! Slot primitives, the view surface contract and a headless surface
//! implementing it.

pub mod headless_surface;
pub mod slot;
pub mod text_input;
pub mod view_surface;

pub use headless_surface::{HeadlessSurface, DEFAULT_CAPACITY};
pub use slot::{DeleteControl, DeleteHandler, Slot, SlotBinding, SlotId};
pub use text_input::{ListenerGuard, TextChangeListener, TextInput};
pub use view_surface::ViewSurface;
