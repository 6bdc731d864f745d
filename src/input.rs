//! Parsing and masking of the raw form fields.
//!
//! Fields hold free text: currency fields are re-masked with ru-RU digit grouping on
//! every edit, the discount field accepts digits and a single decimal point. Anything
//! that does not parse counts as zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::CalculationInput;
use crate::format::format_currency;

/// Text of the three form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub apartment_cost: String,
    pub down_payment: String,
    pub discount_percent: String,
}

impl RawInput {
    pub fn new(
        apartment_cost: impl Into<String>,
        down_payment: impl Into<String>,
        discount_percent: impl Into<String>,
    ) -> Self {
        Self {
            apartment_cost: apartment_cost.into(),
            down_payment: down_payment.into(),
            discount_percent: discount_percent.into(),
        }
    }

    /// Numeric values of the fields; unparsable fields become zero.
    pub fn parse(&self) -> CalculationInput {
        CalculationInput {
            apartment_cost: parse_currency(&self.apartment_cost),
            down_payment: parse_currency(&self.down_payment),
            discount_percent: parse_percentage(&self.discount_percent),
        }
    }
}

/// Integer value of a currency field such as `"10 000 000"`.
///
/// All whitespace is removed first, then the leading (optionally signed) run of digits is
/// read. Characters after it are ignored, like `parseInt`.
pub fn parse_currency(raw: &str) -> Decimal {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    let unsigned = compact.trim_start_matches(['+', '-']);
    let sign_len = compact.len() - unsigned.len();
    if sign_len > 1 {
        return Decimal::ZERO;
    }
    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return Decimal::ZERO;
    }

    let value = Decimal::from_str(&unsigned[..digits_len]).unwrap_or_default();
    if compact.starts_with('-') {
        -value
    } else {
        value
    }
}

/// Leading decimal number of a percentage field, like `parseFloat`.
///
/// `"5.5%"` reads as 5.5, `".5"` as 0.5 and `"abc"` as 0.
pub fn parse_percentage(raw: &str) -> Decimal {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let integer_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let integer = &unsigned[..integer_len];
    let fraction = unsigned[integer_len..]
        .strip_prefix('.')
        .map(|rest| {
            let len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            &rest[..len]
        })
        .unwrap_or("");
    if integer.is_empty() && fraction.is_empty() {
        return Decimal::ZERO;
    }

    let mut number = String::with_capacity(integer.len() + fraction.len() + 3);
    if negative {
        number.push('-');
    }
    number.push_str(if integer.is_empty() { "0" } else { integer });
    if !fraction.is_empty() {
        number.push('.');
        number.push_str(fraction);
    }
    Decimal::from_str(&number).unwrap_or(Decimal::ZERO)
}

/// New text of a currency field after an edit: the grouped amount, or empty if not positive.
pub fn format_input_field(raw: &str) -> String {
    let parsed = parse_currency(raw);
    if parsed > Decimal::ZERO {
        format_currency(parsed)
    } else {
        String::new()
    }
}

/// New text of the discount field after an edit.
///
/// Everything except digits and `.` is dropped. Returns `None` when the result would
/// contain more than one decimal point; the field then keeps its previous text.
pub fn sanitize_percentage(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if cleaned.matches('.').count() > 1 {
        return None;
    }
    Some(cleaned)
}
