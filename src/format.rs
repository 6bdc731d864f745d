//! Russian-locale display formatting for amounts, percentages and dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Digit group separator of the `ru-RU` locale (no-break space).
pub const GROUP_SEPARATOR: char = '\u{a0}';

const ROUND_HALF_UP: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

const MONTHS: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь", "октябрь",
    "ноябрь", "декабрь",
];

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября", "октября",
    "ноября", "декабря",
];

/// Formats an amount the way `Intl.NumberFormat('ru-RU')` does.
///
/// At most three fraction digits are kept, trailing zeros are dropped, thousands are
/// separated by [`GROUP_SEPARATOR`] and the decimal mark is a comma.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(3, ROUND_HALF_UP).normalize();
    if rounded.is_zero() {
        return "0".to_string();
    }

    let digits = rounded.abs().to_string();
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + integer.len() / 3 * 2 + 1);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// One fraction digit with a decimal point, like `Number.prototype.toFixed(1)`.
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, ROUND_HALF_UP);
    format!("{:.1}", rounded)
}

/// Shortest form of a user-entered percentage, e.g. `5.50` becomes `5.5`.
pub fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Month and year in the nominative case, e.g. "август 2027 г.".
pub fn month_year_label(date: NaiveDate) -> String {
    format!("{} {} г.", MONTHS[date.month0() as usize], date.year())
}

/// "До" followed by month and year in the genitive case, e.g. "До августа 2027 года".
pub fn until_month_year(date: NaiveDate) -> String {
    format!("До {} {} года", MONTHS_GENITIVE[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0")]
    #[case(dec!(999), "999")]
    #[case(dec!(1000), "1\u{a0}000")]
    #[case(dec!(50000), "50\u{a0}000")]
    #[case(dec!(10000000), "10\u{a0}000\u{a0}000")]
    #[case(dec!(2700000.0), "2\u{a0}700\u{a0}000")]
    #[case(dec!(694298.845153), "694\u{a0}298,845")]
    #[case(dec!(1234.5678), "1\u{a0}234,568")]
    #[case(dec!(-1500.25), "-1\u{a0}500,25")]
    fn test_format_currency(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(value), expected);
    }

    #[rstest]
    #[case(dec!(50), "50.0")]
    #[case(dec!(33.333333), "33.3")]
    #[case(dec!(66.66), "66.7")]
    #[case(dec!(30.05), "30.1")]
    fn test_format_percent(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(dec!(5.50)), "5.5");
        assert_eq!(format_plain(dec!(10.0)), "10");
    }

    #[test]
    fn test_month_labels() {
        let date = NaiveDate::from_ymd_opt(2027, 8, 31).unwrap();
        assert_eq!(month_year_label(date), "август 2027 г.");
        assert_eq!(until_month_year(date), "До августа 2027 года");

        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        assert_eq!(month_year_label(date), "май 2026 г.");
        assert_eq!(until_month_year(date), "До мая 2026 года");
    }
}
