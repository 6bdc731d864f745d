//! Failure values returned by the calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form field a calculation could not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputField {
    ApartmentCost,
    DownPayment,
    DiscountPercent,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ApartmentCost => "apartment cost",
            Self::DownPayment => "down payment",
            Self::DiscountPercent => "discount percent",
        };
        f.write_str(name)
    }
}

/// Why no installment plan could be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// A primary field is empty or out of range; nothing to calculate yet.
    #[error("Missing or out of range {field}")]
    InvalidInput { field: InputField },

    /// The down payment does not reach 30% of the discounted price.
    #[error("Down payment below the minimum of {required}")]
    BelowMinimumDownPayment { required: Decimal },
}

impl CalculationError {
    pub fn invalid(field: InputField) -> Self {
        Self::InvalidInput { field }
    }

    /// Whether the page should show the empty state without a warning banner.
    pub fn is_quiet(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
