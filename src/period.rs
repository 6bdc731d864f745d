//! Length of the installment period.

use chrono::{Datelike, NaiveDate};

use crate::constants::INSTALLMENT_END;
use crate::format::month_year_label;

/// Calendar months from `from` to `to`, ignoring the day of month.
///
/// Negative when `to` lies in an earlier month.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32
}

/// Number of monthly payments left until the program ends, counted from `today`.
///
/// Zero once `today` reaches the end month.
pub fn installment_months(today: NaiveDate) -> u32 {
    let months = months_between(today, INSTALLMENT_END);
    u32::try_from(months).unwrap_or_else(|_| {
        tracing::debug!(months, %today, "installment program is over");
        0
    })
}

/// End of the program as shown next to the period, e.g. "август 2027 г.".
pub fn end_date_label() -> String {
    month_year_label(INSTALLMENT_END)
}
