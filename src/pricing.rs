//! Pricing

use thiserror::Error;

use crate::{items::Item, prices::parse_price};

/// Errors that can occur while calculating a cart total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TotalPriceError {
    /// No items were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,
}

/// A cart total: summed line totals labeled with a currency.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotal {
    /// Sum of quantity times unit price across all items
    pub amount: f64,

    /// Currency token of the first item, when it parsed to one
    pub currency: Option<String>,
}

/// Total for a single line: quantity times unit price.
#[must_use]
pub fn line_total(quantity: u32, unit_price: f64) -> f64 {
    f64::from(quantity) * unit_price
}

/// Calculates the total of a list of cart items.
///
/// The total is labeled with the currency of the first item, so the line
/// totals are assumed to share a currency; nothing cross-checks the rest.
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: No items were provided, so currency could
///   not be determined.
pub fn cart_total(items: &[Item]) -> Result<CartTotal, TotalPriceError> {
    let first = items.first().ok_or(TotalPriceError::NoItems)?;

    let currency = parse_price(&first.product.price).currency;
    let amount = items.iter().map(Item::line_total).sum();

    Ok(CartTotal { amount, currency })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::Product;

    use super::*;

    fn item(price: &str, quantity: u32) -> Item {
        Item {
            product: Product {
                name: "Product".to_string(),
                price: price.to_string(),
                image: "https://example.com/p.jpg".to_string(),
                url: "https://example.com/p".to_string(),
            },
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert!((line_total(3, 19.99) - 59.97).abs() < 1e-9);
    }

    #[test]
    fn test_cart_total() -> TestResult {
        let items = [item("100,00 PLN", 2), item("19,99 PLN", 1)];

        let total = cart_total(&items)?;

        assert!((total.amount - 219.99).abs() < 1e-9);
        assert_eq!(total.currency.as_deref(), Some("PLN"));

        Ok(())
    }

    #[test]
    fn test_cart_total_empty() {
        let items: [Item; 0] = [];

        assert!(matches!(cart_total(&items), Err(TotalPriceError::NoItems)));
    }

    #[test]
    fn currency_comes_from_first_item() -> TestResult {
        let items = [item("10,00 PLN", 1), item("10,00 EUR", 1)];

        let total = cart_total(&items)?;

        assert_eq!(total.currency.as_deref(), Some("PLN"));

        Ok(())
    }

    #[test]
    fn malformed_price_poisons_total_with_nan() -> TestResult {
        let items = [item("10,00 PLN", 1), item("unknown", 1)];

        let total = cart_total(&items)?;

        assert!(total.amount.is_nan());

        Ok(())
    }
}
