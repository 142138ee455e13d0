//! # Settings Controller
//!
//! Drives the URL list the way the settings screen does: seeds it from a
//! profile, then applies user actions through the slots of a
//! [`HeadlessSurface`] so edits and deletions take the same path as taps
//! and keystrokes would.

use super::models::Entry;
use super::view_models::RecyclingBinder;
use super::views::{HeadlessSurface, SlotId};
use crate::profile::ProfileSettings;
use anyhow::{Context, Result};
use std::rc::Rc;

/// Settings screen controller over a headless surface
pub struct SettingsController {
    surface: Rc<HeadlessSurface>,
    binder: RecyclingBinder<HeadlessSurface>,
}

impl SettingsController {
    /// Create a controller whose surface shows `capacity` rows at a time
    pub fn new(capacity: usize) -> Self {
        let surface = Rc::new(HeadlessSurface::new(capacity));
        let binder = RecyclingBinder::new(Rc::clone(&surface));
        Self { surface, binder }
    }

    pub fn surface(&self) -> &HeadlessSurface {
        &self.surface
    }

    pub fn binder(&self) -> &RecyclingBinder<HeadlessSurface> {
        &self.binder
    }

    /// Replace the list with the profile's initial URLs
    pub fn load(&self, settings: &ProfileSettings) -> Result<()> {
        let urls = settings.initial_urls();
        tracing::debug!("loading {} urls from profile", urls.len());
        self.binder.set_urls(urls);
        self.surface.scroll_to(0);
        self.surface.layout(&self.binder)?;
        Ok(())
    }

    /// Append a new row, as the "add" button does
    pub fn add_url(&self, url: &str) -> Result<usize> {
        let position = self.binder.add_url(url);
        self.surface.layout(&self.binder)?;
        Ok(position)
    }

    /// Type `url` into the row at `position`
    pub fn edit_row(&self, position: usize, url: &str) -> Result<()> {
        let slot = self.reveal(position)?;
        self.type_into(slot, url)
    }

    /// Tap the delete control of the row at `position`
    pub fn delete_row(&self, position: usize) -> Result<()> {
        let slot = self.reveal(position)?;
        self.tap_delete(slot)?;
        self.surface.layout(&self.binder)?;
        Ok(())
    }

    /// Current list, for handing to persistence
    pub fn snapshot(&self) -> Vec<Entry> {
        self.binder.snapshot_all()
    }

    fn type_into(&self, slot: SlotId, url: &str) -> Result<()> {
        if !self.surface.type_into(slot, url) {
            anyhow::bail!("{} is not on screen, nothing was typed", slot);
        }
        Ok(())
    }

    fn tap_delete(&self, slot: SlotId) -> Result<()> {
        if !self.surface.click_delete(slot) {
            anyhow::bail!("{} has no delete handler, nothing was removed", slot);
        }
        Ok(())
    }

    /// Scroll `position` into view and return the slot showing it
    fn reveal(&self, position: usize) -> Result<SlotId> {
        if position >= self.binder.item_count() {
            anyhow::bail!(
                "row {} does not exist, the list has {} rows",
                position,
                self.binder.item_count()
            );
        }

        if self.surface.slot_for_position(position).is_none() {
            self.surface.scroll_to(position);
            self.surface.layout(&self.binder)?;
        }

        self.surface
            .slot_for_position(position)
            .with_context(|| format!("row {} has no slot after layout", position))
    }
}

impl Default for SettingsController {
    fn default() -> Self {
        Self::new(crate::settings::views::DEFAULT_CAPACITY)
    }
}
