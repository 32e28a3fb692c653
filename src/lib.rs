//! Koszyk
//!
//! Koszyk is a small shopping-cart engine: a cart of scraped product
//! entries persisted as a JSON array, quantity operations over it, locale
//! price-string parsing, and render surfaces for HTML and the terminal.

pub mod cart;
pub mod items;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod render;
pub mod store;
