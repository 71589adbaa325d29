//! Prices
//!
//! Catalog prices travel as display strings ("$2.99", "£1.20 / kg"). Cart
//! totals need the numeric portion, so parsing strips every character that is
//! not an ASCII digit or a decimal point before reading a [`Decimal`].

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from parsing a display price.
#[derive(Debug, Error)]
pub enum PriceParseError {
    /// Nothing numeric remained after stripping decoration.
    #[error("no numeric value in price {0:?}")]
    Empty(String),

    /// The numeric residue was not a valid decimal.
    #[error("invalid numeric value in price {price:?}")]
    Invalid {
        price: String,
        #[source]
        source: rust_decimal::Error,
    },
}

/// Parses the numeric portion of a display price.
///
/// Currency symbols and unit suffixes are tolerated by stripping all
/// non-digit, non-decimal-point characters first.
///
/// # Errors
///
/// Returns a [`PriceParseError`] when no digits remain or the residue is not
/// a valid decimal number.
pub fn parse_display_price(price: &str) -> Result<Decimal, PriceParseError> {
    let numeric: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if numeric.is_empty() {
        return Err(PriceParseError::Empty(price.to_string()));
    }

    Decimal::from_str(&numeric).map_err(|source| PriceParseError::Invalid {
        price: price.to_string(),
        source,
    })
}

/// Formats an amount the way the storefront displays money.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_dollar_prefixed_price() -> testresult::TestResult {
        assert_eq!(parse_display_price("$2.99")?, dec!(2.99));

        Ok(())
    }

    #[test]
    fn parses_price_with_unit_suffix() -> testresult::TestResult {
        assert_eq!(parse_display_price("£1.20 / kg")?, dec!(1.20));

        Ok(())
    }

    #[test]
    fn parses_trailing_currency_code() -> testresult::TestResult {
        assert_eq!(parse_display_price("3.50 USD")?, dec!(3.50));

        Ok(())
    }

    #[test]
    fn parses_bare_integer() -> testresult::TestResult {
        assert_eq!(parse_display_price("12")?, dec!(12));

        Ok(())
    }

    #[test]
    fn rejects_price_without_digits() {
        let result = parse_display_price("free!");

        assert!(matches!(result, Err(PriceParseError::Empty(_))));
    }

    #[test]
    fn rejects_multiple_decimal_points() {
        let result = parse_display_price("$1.2.3");

        assert!(matches!(result, Err(PriceParseError::Invalid { .. })));
    }

    #[test]
    fn formats_amount_to_two_places() {
        assert_eq!(format_amount(dec!(8.97)), "$8.97");
        assert_eq!(format_amount(dec!(5)), "$5.00");
    }
}
