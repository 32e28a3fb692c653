//! Cart

use serde::{Deserialize, Serialize};

use crate::{
    items::Item,
    pricing::{CartTotal, TotalPriceError, cart_total},
    products::Product,
};

/// An ordered collection of cart items, unique by product URL.
///
/// Serializes transparently as a JSON array of items, the shape the store
/// persists.
///
/// All index-based mutators treat an out-of-range index as a no-op; they
/// never panic. The quantity invariant is maintained by construction: an
/// item whose quantity would drop below 1 is removed instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cart with the given items.
    #[must_use]
    pub fn with_items(items: impl Into<Vec<Item>>) -> Self {
        Cart {
            items: items.into(),
        }
    }

    /// Adds a product to the cart.
    ///
    /// When an item with the same URL is already present its quantity is
    /// incremented; otherwise the product is appended with a quantity of 1.
    pub fn add(&mut self, product: Product) {
        match self.position_by_url(&product.url) {
            Some(index) => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity = item.quantity.saturating_add(1);
                }
            }
            None => self.items.push(Item::new(product)),
        }
    }

    /// Removes the item at `index`; out-of-range indexes are a no-op.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Increments the quantity of the item at `index`, if there is one.
    pub fn increase_quantity(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = item.quantity.saturating_add(1);
        }
    }

    /// Decrements the quantity of the item at `index`, if there is one.
    ///
    /// An item at quantity 1 is removed entirely rather than kept at 0.
    pub fn decrease_quantity(&mut self, index: usize) {
        match self.items.get(index).map(|item| item.quantity) {
            Some(quantity) if quantity > 1 => {
                if let Some(item) = self.items.get_mut(index) {
                    item.quantity -= 1;
                }
            }
            Some(_) => self.remove(index),
            None => {}
        }
    }

    /// Get the item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// The items in the cart, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get the number of distinct items in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calculate the cart total, labeled with the first item's currency.
    ///
    /// # Errors
    ///
    /// Returns [`TotalPriceError::NoItems`] when the cart is empty and no
    /// currency can be determined.
    pub fn total(&self) -> Result<CartTotal, TotalPriceError> {
        cart_total(&self.items)
    }

    fn position_by_url(&self, url: &str) -> Option<usize> {
        self.items.iter().position(|item| item.product.url == url)
    }
}
