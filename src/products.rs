//! Products

use serde::{Deserialize, Serialize};

/// Product data as captured from a retailer's product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Raw, locale-formatted price string (e.g. `"199,99 PLN"`)
    pub price: String,

    /// Product image URL
    pub image: String,

    /// Product page URL; identity key within a cart
    pub url: String,
}
