//! Price-string handling.

use rust_decimal::Decimal;

/// Extract the numeric amount from a display price such as `"R120.00"`.
///
/// Every character other than digits, `.` and `-` is stripped before
/// parsing; anything still unparsable counts as zero.
#[must_use]
pub fn parse_amount(price: &str) -> Decimal {
    let numeric: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    numeric.parse().unwrap_or(Decimal::ZERO)
}
