//! Items picked for side-by-side comparison

use crate::error::SelectionError;
use bpm_model::{CatalogItem, ItemId};

/// Maximum number of items compared at once
pub const MAX_COMPARISON: usize = 4;

/// Ordered set of up to [`MAX_COMPARISON`] items, unique by id
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelection {
    items: Vec<CatalogItem>,
}

impl ComparisonSelection {
    /// Create empty selection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`
    ///
    /// # Errors
    ///
    /// [`SelectionError::Duplicate`] when an item with the same id is already
    /// selected, [`SelectionError::Full`] when the selection is at capacity.
    pub fn add(&mut self, item: CatalogItem) -> Result<(), SelectionError> {
        if self.contains(item.id()) {
            return Err(SelectionError::Duplicate(item.id().clone()));
        }
        if self.is_full() {
            return Err(SelectionError::Full {
                limit: MAX_COMPARISON,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove the item with `id`, returning it
    pub fn remove(&mut self, id: &ItemId) -> Option<CatalogItem> {
        let index = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether an item with `id` is selected
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|i| i.id() == id)
    }

    /// Selected items in insertion order
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of selected items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another item would be rejected
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_COMPARISON
    }
}
