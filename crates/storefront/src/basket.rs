//! Basket model.
//!
//! The basket is an ordered list of [`LineItem`]s with at most one row per
//! colour. Every mutation writes the whole list back through the
//! [`BasketStore`]; a failed write is logged and the in-memory basket is kept.

use thiserror::Error;
use tracing::instrument;

use lumina_core::{ColorId, LineItem, Quantity};

use crate::store::BasketStore;

/// Errors from basket operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BasketError {
    /// The row index does not exist in the current basket.
    #[error("no basket row at index {index} (basket has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// What a successful mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketChange {
    /// A new row was appended at `index`.
    Appended { index: usize },
    /// The row at `index` now has `quantity`.
    Updated { index: usize, quantity: Quantity },
    /// The row at `index` was removed.
    Removed { index: usize },
}

/// The shopping basket for one page load.
#[derive(Debug)]
pub struct Basket {
    items: Vec<LineItem>,
    store: BasketStore,
}

impl Basket {
    /// Load the basket from `store`. Never fails; see [`BasketStore::load`].
    #[must_use]
    pub fn load(store: BasketStore) -> Self {
        let items = store.load();
        tracing::debug!(rows = items.len(), "Basket loaded");
        Self { items, store }
    }

    /// Rows in display order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the basket has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all row quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Add `quantity` of `color_id`, merging into an existing row of the
    /// same colour.
    #[instrument(skip(self, image_ref), fields(color = %color_id))]
    pub fn add_or_increment(
        &mut self,
        color_id: ColorId,
        quantity: Quantity,
        image_ref: impl Into<String>,
    ) -> BasketChange {
        let change = if let Some((index, item)) = self
            .items
            .iter_mut()
            .enumerate()
            .find(|(_, item)| item.color_id == color_id)
        {
            item.quantity = item.quantity.saturating_add(quantity);
            BasketChange::Updated {
                index,
                quantity: item.quantity,
            }
        } else {
            self.items.push(LineItem::new(color_id, image_ref, quantity));
            BasketChange::Appended {
                index: self.items.len() - 1,
            }
        };

        tracing::info!(?change, "Added to basket");
        self.persist();
        change
    }

    /// Add one to the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::IndexOutOfRange`] if there is no such row.
    #[instrument(skip(self))]
    pub fn increment(&mut self, index: usize) -> Result<BasketChange, BasketError> {
        let item = self.row_mut(index)?;
        item.quantity = item.quantity.increment();
        let change = BasketChange::Updated {
            index,
            quantity: item.quantity,
        };
        self.persist();
        Ok(change)
    }

    /// Take one from the row at `index`, removing the row at zero.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::IndexOutOfRange`] if there is no such row.
    #[instrument(skip(self))]
    pub fn decrement(&mut self, index: usize) -> Result<BasketChange, BasketError> {
        let item = self.row_mut(index)?;
        let change = if let Some(quantity) = item.quantity.decrement() {
            item.quantity = quantity;
            BasketChange::Updated { index, quantity }
        } else {
            self.items.remove(index);
            BasketChange::Removed { index }
        };
        self.persist();
        Ok(change)
    }

    /// Remove the row at `index` whatever its quantity.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::IndexOutOfRange`] if there is no such row.
    #[instrument(skip(self))]
    pub fn remove_at(&mut self, index: usize) -> Result<BasketChange, BasketError> {
        self.row_mut(index)?;
        self.items.remove(index);
        self.persist();
        Ok(BasketChange::Removed { index })
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut LineItem, BasketError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(BasketError::IndexOutOfRange { index, len })
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.items) {
            tracing::error!(error = %e, key = self.store.key(), "Failed to save basket");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{BASKET_KEY, MemoryStore};
    use lumina_core::ColorVariant;

    fn empty_basket() -> (BasketStore, Basket) {
        let store = BasketStore::new(Arc::new(MemoryStore::new()), BASKET_KEY);
        let basket = Basket::load(store.clone());
        (store, basket)
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_add_same_color_twice_keeps_one_row() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::SageGreen.into(), qty(2), "img1");
        let change = basket.add_or_increment(ColorVariant::SageGreen.into(), qty(1), "img2");

        assert_eq!(
            change,
            BasketChange::Updated {
                index: 0,
                quantity: qty(3)
            }
        );
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.items()[0].quantity, qty(3));
        // The first image sticks.
        assert_eq!(basket.items()[0].image_ref, "img1");
    }

    #[test]
    fn test_add_different_colors_appends_in_order() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::DustyRose.into(), qty(1), "a");
        let change = basket.add_or_increment(ColorVariant::LavenderMist.into(), qty(4), "b");

        assert_eq!(change, BasketChange::Appended { index: 1 });
        assert_eq!(basket.items()[0].color_display_name, "DUSTY ROSE");
        assert_eq!(basket.items()[1].color_display_name, "LAVENDER MIST");
        assert_eq!(basket.total_quantity(), 5);
    }

    #[test]
    fn test_unmapped_color_uses_raw_label() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorId::new("Midnight"), qty(1), "x");
        assert_eq!(basket.items()[0].color_display_name, "Midnight");
    }

    #[test]
    fn test_decrement_last_unit_removes_row() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::SageGreen.into(), qty(1), "img1");
        basket.add_or_increment(ColorVariant::DustyRose.into(), qty(2), "img2");

        assert_eq!(basket.decrement(0).unwrap(), BasketChange::Removed { index: 0 });
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.items()[0].color_id.as_str(), "dusty-rose");
    }

    #[test]
    fn test_quantity_stays_positive_through_increments_and_decrements() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::MoonlightWhite.into(), qty(2), "img");

        for step in [1, -1, -1, 1, 1, -1, -1, -1] {
            if basket.is_empty() {
                break;
            }
            if step > 0 {
                basket.increment(0).unwrap();
            } else {
                basket.decrement(0).unwrap();
            }
            assert!(basket.items().iter().all(|item| item.quantity.get() >= 1));
        }
        assert!(basket.is_empty());
    }

    #[test]
    fn test_remove_at_ignores_quantity() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::SageGreen.into(), qty(9), "img");
        assert_eq!(basket.remove_at(0).unwrap(), BasketChange::Removed { index: 0 });
        assert!(basket.is_empty());
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let (_, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::SageGreen.into(), qty(1), "img");

        let err = BasketError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(basket.increment(3), Err(err.clone()));
        assert_eq!(basket.decrement(3), Err(err.clone()));
        assert_eq!(basket.remove_at(3), Err(err));
        assert_eq!(basket.items()[0].quantity, qty(1));
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (store, mut basket) = empty_basket();
        basket.add_or_increment(ColorVariant::SageGreen.into(), qty(2), "img1");
        assert_eq!(store.load(), basket.items());

        basket.increment(0).unwrap();
        assert_eq!(store.load()[0].quantity, qty(3));

        basket.remove_at(0).unwrap();
        assert!(store.load().is_empty());

        let reloaded = Basket::load(store);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_end_to_end_add_then_drain() {
        let (store, mut basket) = empty_basket();
        basket.add_or_increment(ColorId::new("sage-green"), qty(2), "img1");
        assert_eq!(basket.items()[0].quantity, qty(2));

        basket.add_or_increment(ColorId::new("sage-green"), qty(1), "img1");
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.items()[0].quantity, qty(3));

        for _ in 0..3 {
            basket.decrement(0).unwrap();
        }
        assert!(basket.is_empty());
        assert!(store.load().is_empty());
    }
}
