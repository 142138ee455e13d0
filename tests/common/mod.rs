//! Shared helpers for the binding integration tests

use std::rc::Rc;
use wsurls::{HeadlessSurface, RecyclingBinder};

/// Surface of `capacity` rows laid out over `urls`, with the setup
/// notifications already drained
pub fn laid_out(
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
