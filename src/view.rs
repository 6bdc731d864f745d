//! State of the calculator page between edits.

use chrono::NaiveDate;
use serde::Serialize;

use crate::input::RawInput;
use crate::render::error_banner;
use crate::{CalculationResult, calculate_installment};

/// What the page currently shows: the last result, if any, and the warning banner text.
///
/// A new `View` is built on every edit; the previous one is simply dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub result: Option<CalculationResult>,
    pub error: Option<String>,
}

impl View {
    /// Recomputes everything from the field texts as of `today`.
    pub fn recalculate(raw: &RawInput, today: NaiveDate) -> Self {
        match calculate_installment(raw.parse(), today) {
            Ok(result) => Self {
                result: Some(result),
                error: None,
            },
            Err(err) => {
                if !err.is_quiet() {
                    tracing::debug!(%err, "calculation rejected");
                }
                Self {
                    result: None,
                    error: error_banner(&err),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }
}
