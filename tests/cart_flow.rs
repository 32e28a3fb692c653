//! Integration test covering the full cart lifecycle against a file store:
//! add/merge by URL, quantity changes, persistence round-trips, and both
//! render surfaces.

use tempfile::tempdir;
use testresult::TestResult;

use koszyk::prelude::*;

fn product(name: &str, url: &str, price: &str) -> Product {
    Product {
        name: name.to_string(),
        price: price.to_string(),
        image: format!("{url}.jpg"),
        url: url.to_string(),
    }
}

#[test]
fn cart_lifecycle_round_trips_through_the_store() -> TestResult {
    let dir = tempdir()?;
    let store = CartStore::new(dir.path().join("cart.json"));

    // First access with nothing persisted yields an empty cart.
    let mut cart = store.load()?;
    assert!(cart.is_empty());

    // Adding the same URL twice merges into one entry with quantity 2.
    cart.add(product("Denim shirt", "https://example.com/shirt", "199,99 PLN"));
    cart.add(product("Denim shirt", "https://example.com/shirt", "199,99 PLN"));
    cart.add(product("Wool socks", "https://example.com/socks", "19,99 PLN"));
    store.save(&cart)?;

    let mut reloaded = store.load()?;
    assert_eq!(reloaded, cart);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.get(0).map(|item| item.quantity), Some(2));

    // Decreasing from 2 keeps the entry at quantity 1.
    reloaded.decrease_quantity(0);
    assert_eq!(reloaded.get(0).map(|item| item.quantity), Some(1));

    // Decreasing from 1 removes the entry entirely.
    reloaded.decrease_quantity(0);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(
        reloaded.get(0).map(|item| item.product.name.as_str()),
        Some("Wool socks")
    );

    // Out-of-range removal leaves the cart unchanged.
    reloaded.remove(10);
    assert_eq!(reloaded.len(), 1);

    store.save(&reloaded)?;
    assert_eq!(store.load()?, reloaded);

    // Clearing persists an empty cart.
    store.clear()?;
    assert!(store.load()?.is_empty());

    Ok(())
}

#[test]
fn totals_and_render_surfaces_agree_on_the_cart() -> TestResult {
    let dir = tempdir()?;
    let store = CartStore::new(dir.path().join("cart.json"));

    let mut cart = store.load()?;
    cart.add(product("Denim shirt", "https://example.com/shirt", "199,99 PLN"));
    cart.add(product("Denim shirt", "https://example.com/shirt", "199,99 PLN"));
    cart.add(product("Wool socks", "https://example.com/socks", "19,99 PLN"));
    store.save(&cart)?;

    let cart = store.load()?;

    let total = cart.total()?;
    assert!((total.amount - 419.97).abs() < 1e-9);
    assert_eq!(total.currency.as_deref(), Some("PLN"));

    let html = render_cart(&cart);
    assert!(html.contains("<div id=\"cart\">"));
    assert!(html.contains("<div id=\"products\">"));
    assert!(html.contains("Cart total: 419.97 PLN"));
    assert!(html.contains("Quantity: 2"));

    let mut out = Vec::new();
    write_receipt(&mut out, &cart)?;
    let receipt = String::from_utf8(out)?;
    assert!(receipt.contains("Denim shirt"));
    assert!(receipt.contains("419.97 PLN"));

    Ok(())
}

#[test]
fn empty_cart_renders_without_a_currency_label() -> TestResult {
    let dir = tempdir()?;
    let store = CartStore::new(dir.path().join("cart.json"));

    let cart = store.load()?;
    assert!(matches!(cart.total(), Err(TotalPriceError::NoItems)));

    let html = render_cart(&cart);
    assert!(html.contains("Cart total: 0.00</p>"));

    Ok(())
}
