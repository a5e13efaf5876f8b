//! Currency formatting for display.
//!
//! Formatting is a pure function of the price and a [`PriceFormat`] value;
//! there is no process-wide formatter state.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Display rules for a price.
///
/// The default matches the `#,###` pattern: digits grouped by three with a
/// comma and no fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PriceFormat {
    pub grouping_separator: char,
    /// Digits per group; `0` disables grouping.
    pub group_size: usize,
    pub decimal_separator: char,
    pub fraction_digits: u32,
}

impl Default for PriceFormat {
    fn default() -> Self {
        Self {
            grouping_separator: ',',
            group_size: 3,
            decimal_separator: '.',
            fraction_digits: 0,
        }
    }
}

impl PriceFormat {
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits;
        self
    }
}

/// Format a price according to `format`.
///
/// The value is rounded half-to-even to `fraction_digits`, then the integer
/// part is grouped. A rounded zero never carries a minus sign.
pub fn format_price(price: Decimal, format: &PriceFormat) -> String {
    let rounded = price.round_dp_with_strategy(
        format.fraction_digits,
        RoundingStrategy::MidpointNearestEven,
    );
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), ""),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(int_part, format));

    if format.fraction_digits > 0 {
        out.push(format.decimal_separator);
        let width = format.fraction_digits as usize;
        out.push_str(frac_part);
        for _ in frac_part.len()..width {
            out.push('0');
        }
    }
    out
}

fn group_digits(digits: &str, format: &PriceFormat) -> String {
    if format.group_size == 0 || digits.len() <= format.group_size {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / format.group_size);
    let lead = digits.len() % format.group_size;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + format.group_size - lead) % format.group_size == 0 {
            out.push(format.grouping_separator);
        }
        out.push(ch);
    }
    out
}
