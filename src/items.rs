//! Items

use serde::{Deserialize, Serialize};

use crate::{prices::parse_price, pricing::line_total, products::Product};

/// A cart entry: one product with a quantity.
///
/// Serializes flat, with the product fields and `quantity` at the same JSON
/// level, so a persisted cart is a plain array of
/// `{ name, price, image, url, quantity }` objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The product this entry refers to
    #[serde(flatten)]
    pub product: Product,

    /// Number of units; always at least 1
    pub quantity: u32,
}

impl Item {
    /// Creates a new item for the given product with a quantity of 1.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Total for this entry: quantity times the parsed unit price.
    ///
    /// A malformed price string yields [`f64::NAN`], matching the parser's
    /// degradation contract.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        line_total(self.quantity, parse_price(&self.product.price).amount)
    }
}
