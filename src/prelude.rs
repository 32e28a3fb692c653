//! Koszyk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::Cart,
    items::Item,
    prices::{ParsedPrice, parse_price},
    pricing::{CartTotal, TotalPriceError, cart_total, line_total},
    products::Product,
    receipt::{ReceiptError, write_receipt},
    render::render_cart,
    store::{CartStore, StoreError},
};
