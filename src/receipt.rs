//! Receipt

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, items::Item, prices::parse_price};

/// Errors that can occur while writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapped IO error from the output sink.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes the cart as a terminal receipt table.
///
/// One row per item (position, name, quantity, unit price, line total),
/// followed by a total line labeled with the first item's currency. An
/// empty cart prints an explicit empty-cart line instead of a table.
///
/// # Errors
///
/// Returns a [`ReceiptError`] when the receipt cannot be written to `out`.
pub fn write_receipt(mut out: impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    if cart.is_empty() {
        writeln!(out, "\nCart is empty.")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total"]);

    for (index, item) in cart.iter().enumerate() {
        builder.push_record(item_row(item, index));
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "\n{table}")?;

    write_receipt_summary(&mut out, cart)?;

    Ok(())
}

fn item_row(item: &Item, index: usize) -> [String; 5] {
    let unit = parse_price(&item.product.price);
    let currency = unit.currency.as_deref().unwrap_or_default();

    [
        format!("#{:<3}", index + 1),
        item.product.name.clone(),
        item.quantity.to_string(),
        format!("{} {currency}", unit.amount),
        format!("{:.2} {currency}", item.line_total()),
    ]
}

fn write_receipt_summary(out: &mut impl io::Write, cart: &Cart) -> Result<(), ReceiptError> {
    let (amount, currency) = match cart.total() {
        Ok(total) => (total.amount, total.currency),
        Err(_) => (0.0, None),
    };

    writeln!(
        out,
        " \x1b[1mTotal:\x1b[0m {amount:.2} {currency}",
        currency = currency.as_deref().unwrap_or_default()
    )?;

    Ok(())
}
