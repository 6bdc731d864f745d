//! Fixed terms of the installment program.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Amount of every monthly installment, in rubles.
pub const MONTHLY_PAYMENT: Decimal = dec!(50000);

/// Share of the discounted price the down payment must cover.
pub const MIN_DOWN_PAYMENT_RATIO: Decimal = dec!(0.3);

/// Down payment percentage above which the installment is interest-free.
pub const ZERO_INTEREST_THRESHOLD: Decimal = dec!(50);

/// Annual interest rate, in percent, charged below the threshold.
pub const BASE_INTEREST_RATE: Decimal = dec!(10);

/// Last day of the installment program.
pub const INSTALLMENT_END: NaiveDate = match NaiveDate::from_ymd_opt(2027, 8, 31) {
    Some(date) => date,
    None => panic!("installment end date is not a calendar date"),
};
