//! `ru_installment` calculates an apartment installment plan that runs until a fixed
//! program end date (August 2027).
//!
//! Given the apartment price, the down payment and an optional discount, the calculator:
//! - applies the discount and checks the down payment covers at least 30% of the
//!   discounted price;
//! - picks the interest tier: **0%** when the down payment is above 50% of the discounted
//!   price, **10%** per annum otherwise;
//! - charges interest on the remainder with the annuity formula
//!   `PMT = P * [i(1 + i)^n] / [(1 + i)^n – 1]` over the months left in the program;
//! - splits what is owed into fixed 50 000 ₽ monthly payments and the balance left over
//!   once the program ends.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use ru_installment::{CalculationInput, calculate_installment};
//! use rust_decimal_macros::dec;
//!
//! let input = CalculationInput {
//!     apartment_cost: dec!(10_000_000),
//!     down_payment: dec!(5_000_000),
//!     discount_percent: dec!(0),
//! };
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//!
//! match calculate_installment(input, today) {
//!     Ok(result) => {
//!         println!("Payments:      {}", result.number_of_payments);
//!         println!("Interest:      {:.2}", result.interest_amount);
//!         println!("Left to pay:   {:.2}", result.remaining_after_installments);
//!         println!("Total cost:    {}", result.total_cost);
//!     }
//!     Err(e) => eprintln!("Nothing to show: {}", e),
//! }
//! ```
//!
//! The [`view`] and [`render`] modules turn raw form strings into the HTML fragments of the
//! calculator page.

pub mod constants;
pub mod error;
pub mod format;
pub mod input;
pub mod period;
pub mod render;
pub mod view;

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

pub use error::{CalculationError, InputField};
pub use input::RawInput;
pub use view::View;

use constants::{
    BASE_INTEREST_RATE, MIN_DOWN_PAYMENT_RATIO, MONTHLY_PAYMENT, ZERO_INTEREST_THRESHOLD,
};

/// Numeric input of a calculation, already parsed from the form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Price of the apartment before any discount.
    pub apartment_cost: Decimal,
    /// Amount paid up front.
    pub down_payment: Decimal,
    /// Discount as a percentage of the apartment cost (e.g., 5 for 5%).
    pub discount_percent: Decimal,
}

/// Every figure shown by the calculator for one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub apartment_cost: Decimal,
    /// Discount amount, `apartment_cost * discount_percentage / 100`.
    pub discount: Decimal,
    pub discount_percentage: Decimal,
    pub discounted_price: Decimal,
    pub down_payment: Decimal,
    /// Down payment as a percentage of the discounted price.
    ///
    /// `None` when a 100% discount leaves no price to compare against.
    pub down_payment_percentage: Option<Decimal>,
    /// Annual interest rate in percent, either 0 or 10.
    pub interest_rate: Decimal,
    /// What is left to pay after the down payment.
    pub remaining_amount: Decimal,
    /// Total interest accrued over the installment period.
    pub interest_amount: Decimal,
    pub monthly_payment: Decimal,
    /// Whole months between today and the program end date.
    pub number_of_payments: u32,
    /// `monthly_payment * number_of_payments`.
    pub total_payments: Decimal,
    /// Balance still owed once the monthly payments run out (never negative).
    pub remaining_after_installments: Decimal,
    /// Down payment, monthly payments and leftover balance, rounded to whole rubles.
    pub total_cost: Decimal,
    /// Program end date as "месяц год", e.g. "август 2027 г.".
    pub end_date_label: String,
}

/// Computes the installment plan for `input` as of `today`.
///
/// This is the main entry point of the library. It is a pure function: the same
/// arguments always produce the same result.
///
/// # Errors
///
/// - [`CalculationError::InvalidInput`] if the apartment cost or the down payment is not
///   positive, the discount is outside 0..=100, or an amount is too large to calculate with.
/// - [`CalculationError::BelowMinimumDownPayment`] if the down payment is less than 30% of
///   the discounted price.
pub fn calculate_installment(
    input: CalculationInput,
    today: NaiveDate,
) -> Result<CalculationResult, CalculationError> {
    if input.apartment_cost <= Decimal::ZERO {
        return Err(CalculationError::invalid(InputField::ApartmentCost));
    }
    if input.down_payment <= Decimal::ZERO {
        return Err(CalculationError::invalid(InputField::DownPayment));
    }
    if input.discount_percent < Decimal::ZERO || input.discount_percent > Decimal::ONE_HUNDRED {
        return Err(CalculationError::invalid(InputField::DiscountPercent));
    }

    let discount = (input.discount_percent / Decimal::ONE_HUNDRED)
        .checked_mul(input.apartment_cost)
        .ok_or_else(|| overflow(InputField::ApartmentCost))?;
    let discounted_price = input.apartment_cost - discount;

    let min_down_payment = discounted_price * MIN_DOWN_PAYMENT_RATIO;
    if input.down_payment < min_down_payment {
        tracing::debug!(
            down_payment = %input.down_payment,
            required = %min_down_payment,
            "down payment below the minimum"
        );
        return Err(CalculationError::BelowMinimumDownPayment {
            required: min_down_payment,
        });
    }

    let down_payment_percentage = if discounted_price.is_zero() {
        None
    } else {
        let percentage = input
            .down_payment
            .checked_div(discounted_price)
            .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| overflow(InputField::DownPayment))?;
        Some(percentage)
    };
    let number_of_payments = period::installment_months(today);
    // A fully discounted apartment is paid for by any down payment.
    let interest_rate = down_payment_percentage
        .map(interest_rate_for)
        .unwrap_or(Decimal::ZERO);
    let remaining_amount = discounted_price - input.down_payment;
    let interest_amount = annuity_interest(remaining_amount, interest_rate, number_of_payments)
        .ok_or_else(|| overflow(InputField::ApartmentCost))?;

    let total_payments = MONTHLY_PAYMENT * Decimal::from(number_of_payments);
    let owed = remaining_amount
        .checked_add(interest_amount)
        .ok_or_else(|| overflow(InputField::ApartmentCost))?;
    let remaining_after_installments = owed
        .checked_sub(total_payments)
        .ok_or_else(|| overflow(InputField::DownPayment))?
        .max(Decimal::ZERO);
    let total_cost = input
        .down_payment
        .checked_add(total_payments)
        .and_then(|paid| paid.checked_add(remaining_after_installments))
        .map(round_half_up)
        .ok_or_else(|| overflow(InputField::DownPayment))?;

    tracing::debug!(
        %discounted_price,
        %interest_rate,
        number_of_payments,
        %total_cost,
        "installment calculated"
    );

    Ok(CalculationResult {
        apartment_cost: input.apartment_cost,
        discount,
        discount_percentage: input.discount_percent,
        discounted_price,
        down_payment: input.down_payment,
        down_payment_percentage,
        interest_rate,
        remaining_amount,
        interest_amount,
        monthly_payment: MONTHLY_PAYMENT,
        number_of_payments,
        total_payments,
        remaining_after_installments,
        total_cost,
        end_date_label: period::end_date_label(),
    })
}

fn overflow(field: InputField) -> CalculationError {
    tracing::debug!(%field, "amount too large to calculate with");
    CalculationError::invalid(field)
}

/// Annual interest rate, in percent, for a down payment of `down_payment_percentage`.
///
/// Strictly more than half of the price paid up front makes the installment interest-free.
pub fn interest_rate_for(down_payment_percentage: Decimal) -> Decimal {
    if down_payment_percentage > ZERO_INTEREST_THRESHOLD {
        Decimal::ZERO
    } else {
        BASE_INTEREST_RATE
    }
}

/// Total interest paid on `principal` when it is amortized with level payments.
///
/// `annual_rate` is a percentage (10 for 10%), compounded monthly as `annual_rate / 12`.
/// Returns zero when the rate or the number of months is zero, and `None` if the
/// amounts overflow.
pub fn annuity_interest(principal: Decimal, annual_rate: Decimal, months: u32) -> Option<Decimal> {
    if annual_rate <= Decimal::ZERO || months == 0 {
        return Some(Decimal::ZERO);
    }

    let monthly_rate = annual_rate / Decimal::ONE_HUNDRED / dec!(12);

    // PMT = P * [i(1 + i)^n] / [(1 + i)^n – 1]
    let payment = match (Decimal::ONE + monthly_rate).checked_powu(months.into()) {
        Some(factor) => principal
            .checked_mul(monthly_rate * factor)?
            .checked_div(factor - Decimal::ONE)?,
        // (1 + i)^n too large to represent: the fraction has converged to i.
        None => principal.checked_mul(monthly_rate)?,
    };

    payment
        .checked_mul(Decimal::from(months))?
        .checked_sub(principal)
}

/// Rounds to whole units, halves going up (`Math.round`).
pub fn round_half_up(value: Decimal) -> Decimal {
    let floor = value.floor();
    if value - floor >= dec!(0.5) {
        floor + Decimal::ONE
    } else {
        floor
    }
}
