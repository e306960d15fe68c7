//! Selection state of the saved-cards screen.
//!
//! The carousel shows one focused card at a time with a row of indicator dots.
//! Scrolling and snapping are left to the UI; this only tracks which card is
//! selected and what "Delete Selected" does to that selection.

use crate::error::Result;
use crate::model::CardRecord;
use crate::prefs::Preferences;
use crate::store::CardStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    selected: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Focuses `index`. Ignored when there is no card there.
    pub fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Pulls the selection back inside `0..len` (or to 0 when empty).
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Removes the selected card and focuses the new last card.
    pub fn delete_selected<P: Preferences>(
        &mut self,
        store: &mut CardStore<P>,
    ) -> Result<Option<CardRecord>> {
        if self.selected >= store.len() {
            return Ok(None);
        }
        let removed = store.remove_at(self.selected as isize)?;
        self.selected = store.len().saturating_sub(1);
        Ok(removed)
    }

    /// One dot per card, `true` for the focused one.
    pub fn indicators(&self, len: usize) -> Vec<bool> {
        (0..len).map(|i| i == self.selected).collect()
    }
}
