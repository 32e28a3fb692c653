//! HTML rendering

use std::fmt::Write;

use crate::{cart::Cart, items::Item, prices::parse_price};

/// Renders the cart widget as an HTML fragment.
///
/// The fragment mirrors the widget the cart was born as: a `div#cart`
/// container with a title, a `div#products` list of per-item blocks, and a
/// `p#cart-total` running total labeled with the first item's currency.
/// Controls carry `data-action`/`data-index` attributes for a host to wire
/// up.
///
/// This is a pure function of the cart, so re-rendering the same cart
/// produces the same fragment; the stable element ids let a host replace
/// any previously inserted copy instead of duplicating it. An empty cart
/// renders a `0.00` total with no currency label.
#[must_use]
pub fn render_cart(cart: &Cart) -> String {
    let mut out = String::new();

    _ = out.write_str("<div id=\"cart\">\n");
    _ = out.write_str("<h2>Cart</h2>\n");
    _ = out.write_str("<div id=\"products\">\n");

    for (index, item) in cart.iter().enumerate() {
        render_item(&mut out, item, index);
    }

    _ = out.write_str("</div>\n");

    let (total, currency) = match cart.total() {
        Ok(total) => (total.amount, total.currency),
        Err(_) => (0.0, None),
    };

    _ = write!(out, "<p id=\"cart-total\">Cart total: {total:.2}");
    if let Some(currency) = currency {
        _ = write!(out, " {}", escape(&currency));
    }
    _ = out.write_str("</p>\n</div>\n");

    out
}

fn render_item(out: &mut String, item: &Item, index: usize) {
    let unit = parse_price(&item.product.price);
    let name = escape(&item.product.name);
    let image = escape(&item.product.image);
    let url = escape(&item.product.url);

    _ = out.write_str("<div class=\"cart-item\">\n");

    _ = writeln!(
        out,
        "<p>{name} <button data-action=\"remove\" data-index=\"{index}\">x</button></p>"
    );

    _ = write!(out, "<p>Unit price: {}", unit.amount);
    if let Some(currency) = unit.currency.as_deref() {
        _ = write!(out, " {}", escape(currency));
    }
    _ = out.write_str("</p>\n");

    _ = writeln!(
        out,
        "<p>Quantity: {quantity} \
         <button data-action=\"increase\" data-index=\"{index}\">+</button> / \
         <button data-action=\"decrease\" data-index=\"{index}\">-</button></p>",
        quantity = item.quantity
    );

    _ = write!(out, "<p>Total price: {:.2}", item.line_total());
    if let Some(currency) = unit.currency.as_deref() {
        _ = write!(out, " {}", escape(currency));
    }
    _ = out.write_str("</p>\n");

    _ = writeln!(
        out,
        "<p>[ <a href=\"{image}\">image</a> / <a href=\"{url}\">product</a> ]</p>"
    );

    _ = out.write_str("</div>\n");
}

/// Escapes text for use in HTML content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
