//! Prices

/// A price string split into its numeric value and currency token.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPrice {
    /// Numeric value; [`f64::NAN`] when the input could not be parsed
    pub amount: f64,

    /// Currency code or symbol, taken verbatim; `None` when absent
    pub currency: Option<String>,
}

/// Parses a locale-formatted price string such as `"199,99 PLN"`.
///
/// The string is split on a plain ASCII space; when that yields a single
/// token the split is retried on U+00A0 (non-breaking space), the other
/// formatting variant seen in the wild. The first token has its decimal
/// comma replaced with a period and is parsed as a float; the second token
/// is returned verbatim as the currency.
///
/// There is no validation: malformed input degrades to [`f64::NAN`] and a
/// `None` currency rather than an error.
#[must_use]
pub fn parse_price(price: &str) -> ParsedPrice {
    let mut parts: Vec<&str> = price.split(' ').collect();
    if parts.len() == 1 {
        parts = price.split('\u{00A0}').collect();
    }

    let amount = parts
        .first()
        .map_or(f64::NAN, |token| {
            token.replace(',', ".").parse().unwrap_or(f64::NAN)
        });

    let currency = parts.get(1).map(|token| (*token).to_string());

    ParsedPrice { amount, currency }
}
