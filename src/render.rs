//! HTML fragments of the calculator page.
//!
//! Each function takes the current result (or `None` before anything was calculated) and
//! returns the text or markup for one block of the page.

use rust_decimal::Decimal;

use crate::constants::INSTALLMENT_END;
use crate::format::{format_currency, format_percent, format_plain, until_month_year};
use crate::{CalculationError, CalculationResult, View};

const PLACEHOLDER: &str = r#"<p class="text-gray-500">Введите данные для расчета</p>"#;

const SCHEDULE_GRID: &str =
    r#"<div class="grid grid-rows-3 grid-cols-1 gap-4 md:grid-rows-3 md:grid-cols-1">"#;

/// Texts of the installment period card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodText {
    pub period: String,
    pub end_date: String,
}

/// Texts of the interest rate card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateText {
    pub rate: String,
    pub description: String,
}

pub fn installment_period(result: Option<&CalculationResult>) -> PeriodText {
    match result {
        Some(result) => PeriodText {
            period: format!("{} месяцев", result.number_of_payments),
            end_date: format!("До {}", result.end_date_label),
        },
        None => PeriodText {
            period: "Рассчитывается автоматически".to_string(),
            end_date: until_month_year(INSTALLMENT_END),
        },
    }
}

pub fn interest_rate(result: Option<&CalculationResult>) -> RateText {
    let (rate, interest_free) = match result {
        Some(result) => (
            format!("{}%", format_plain(result.interest_rate)),
            result.interest_rate.is_zero(),
        ),
        None => ("0%".to_string(), false),
    };
    let description = if interest_free {
        "Первый взнос больше 50% от стоимости"
    } else {
        "Первый взнос меньше 50% от стоимости"
    };
    RateText {
        rate,
        description: description.to_string(),
    }
}

fn rubles(value: Decimal) -> String {
    format!("{} ₽", format_currency(value))
}

fn whole_rubles(value: Decimal) -> String {
    rubles(crate::round_half_up(value))
}

/// Down payment share with one decimal, or "∞" when the discount covers the whole price.
fn down_payment_share(result: &CalculationResult) -> String {
    match result.down_payment_percentage {
        Some(percentage) => format_percent(percentage),
        None => "∞".to_string(),
    }
}

fn breakdown_row(out: &mut String, label: &str, value_class: &str, value: &str) {
    out.push_str(&format!(
        r#"
            <div class="flex justify-between items-center py-2 border-b border-gray-100">
                <span class="text-gray-600">{label}</span>
                <span class="{value_class}">{value}</span>
            </div>"#
    ));
}

/// Line-by-line breakdown of the price, discount and down payment.
///
/// Discount rows are only present when a discount was applied.
pub fn breakdown_html(result: Option<&CalculationResult>) -> String {
    let Some(result) = result else {
        return PLACEHOLDER.to_string();
    };

    let mut html = String::from(r#"<div class="space-y-3">"#);
    breakdown_row(
        &mut html,
        "Стоимость квартиры:",
        "font-medium",
        &rubles(result.apartment_cost),
    );
    if result.discount_percentage > Decimal::ZERO {
        breakdown_row(
            &mut html,
            &format!("Скидка ({}%):", format_plain(result.discount_percentage)),
            "font-medium text-green-600",
            &format!("- {}", rubles(result.discount)),
        );
        breakdown_row(
            &mut html,
            "Стоимость с учетом скидки:",
            "font-medium",
            &rubles(result.discounted_price),
        );
    }
    breakdown_row(
        &mut html,
        "Первый взнос:",
        "font-medium",
        &rubles(result.down_payment),
    );
    breakdown_row(
        &mut html,
        "Размер первого взноса:",
        "font-medium",
        &format!("{}%", down_payment_share(result)),
    );
    html.push_str("\n</div>\n");

    html.push_str(&format!(
        r#"
<div class="bg-gray-50 rounded-lg p-4 space-y-3">
    <div class="flex justify-between items-center">
        <span class="text-gray-600">Остаток к доплате:</span>
        <span class="font-medium">{remaining}</span>
    </div>
    <div class="flex justify-between items-center">
        <span class="text-gray-600">Проценты за {months} месяцев:</span>
        <span class="font-medium">{interest}</span>
    </div>
    <div class="flex justify-between items-center text-lg font-semibold pt-2 border-t border-gray-200">
        <span class="text-gray-900">Итоговая стоимость:</span>
        <span class="text-blue-600">{total}</span>
    </div>
</div>
"#,
        remaining = rubles(result.remaining_amount),
        months = result.number_of_payments,
        interest = whole_rubles(result.interest_amount),
        total = whole_rubles(result.total_cost),
    ));
    html
}

fn schedule_card(out: &mut String, color: &str, title: &str, amount: &str, note: &str) {
    out.push_str(&format!(
        r#"
    <div class="bg-{color}-50 rounded-lg p-6 min-w-[180px] text-center">
        <h4 class="text-sm font-medium text-gray-700 mb-2">{title}</h4>
        <div class="text-lg font-bold text-{color}-600 break-words">
            {amount}
        </div>
        <div class="text-xs text-gray-600 mt-1">
            {note}
        </div>
    </div>"#
    ));
}

/// Down payment, monthly installments and the balance left once the program ends.
pub fn schedule_html(result: Option<&CalculationResult>) -> String {
    let Some(result) = result else {
        return PLACEHOLDER.to_string();
    };

    let mut html = String::from(SCHEDULE_GRID);
    schedule_card(
        &mut html,
        "blue",
        "Первый взнос",
        &rubles(result.down_payment),
        &format!("{}% от стоимости", down_payment_share(result)),
    );
    schedule_card(
        &mut html,
        "green",
        "Выплата в рассрочку",
        &rubles(result.total_payments),
        &format!(
            "{} платежей по {}",
            result.number_of_payments,
            rubles(result.monthly_payment)
        ),
    );
    schedule_card(
        &mut html,
        "orange",
        "Останется выплатить",
        &whole_rubles(result.remaining_after_installments),
        "или перевести в ипотеку",
    );
    html.push_str("\n</div>\n");

    html.push_str(&format!(
        r#"
<div class="bg-gray-50 rounded-lg p-4">
    <div class="flex justify-between items-center text-sm text-gray-600 mb-2">
        <span>Итоговая переплата по рассрочке:</span>
        <span class="font-medium">{interest}</span>
    </div>
    <div class="flex justify-between items-center text-lg font-semibold pt-2 border-t border-gray-200">
        <span class="text-gray-900">Итоговая стоимость:</span>
        <span class="text-blue-600">{total}</span>
    </div>
</div>
"#,
        interest = whole_rubles(result.interest_amount),
        total = whole_rubles(result.total_cost),
    ));
    html
}

/// Warning shown above the results, if the error deserves one.
pub fn error_banner(error: &CalculationError) -> Option<String> {
    match error {
        CalculationError::InvalidInput { .. } => None,
        CalculationError::BelowMinimumDownPayment { required } => {
            Some(format!("Минимальный первый взнос: {}", rubles(*required)))
        }
    }
}

/// Standalone HTML document with every block of the calculator filled in from `view`.
pub fn page(view: &View) -> String {
    let result = view.result.as_ref();
    let period = installment_period(result);
    let rate = interest_rate(result);
    let (error_class, error_message) = match &view.error {
        Some(message) => ("", message.as_str()),
        None => (" hidden", ""),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Калькулятор рассрочки</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
<main class="max-w-3xl mx-auto p-6 space-y-6">
<h1 class="text-2xl font-bold text-gray-900">Калькулятор рассрочки</h1>
<div id="validationError" class="bg-red-50 text-red-700 rounded-lg p-4{error_class}">
<span id="errorMessage">{error_message}</span>
</div>
<div class="grid grid-cols-2 gap-4">
<div class="bg-white rounded-lg p-4">
<h3 class="text-sm text-gray-600">Срок рассрочки</h3>
<div id="installmentPeriod" class="text-xl font-semibold">{period}</div>
<div id="installmentEndDate" class="text-xs text-gray-500">{end_date}</div>
</div>
<div class="bg-white rounded-lg p-4">
<h3 class="text-sm text-gray-600">Процентная ставка</h3>
<div id="interestRate" class="text-xl font-semibold">{rate}</div>
<div id="interestRateDescription" class="text-xs text-gray-500">{description}</div>
</div>
</div>
<section class="bg-white rounded-lg p-6 space-y-4">
<h2 class="text-lg font-semibold">Расчет стоимости</h2>
<div id="calculationDetails" class="space-y-4">
{breakdown}
</div>
</section>
<section class="bg-white rounded-lg p-6 space-y-4">
<h2 class="text-lg font-semibold">График платежей</h2>
<div id="scheduleDetails" class="space-y-4">
{schedule}
</div>
</section>
</main>
</body>
</html>
"#,
        period = period.period,
        end_date = period.end_date,
        rate = rate.rate,
        description = rate.description,
        breakdown = breakdown_html(result),
        schedule = schedule_html(result),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CalculationInput, calculate_installment};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn result(down: Decimal, discount: Decimal) -> CalculationResult {
        let input = CalculationInput {
            apartment_cost: dec!(10_000_000),
            down_payment: down,
            discount_percent: discount,
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        calculate_installment(input, today).unwrap()
    }

    #[test]
    fn test_empty_state_texts() {
        assert_eq!(
            installment_period(None),
            PeriodText {
                period: "Рассчитывается автоматически".to_string(),
                end_date: "До августа 2027 года".to_string(),
            }
        );
        assert_eq!(
            interest_rate(None),
            RateText {
                rate: "0%".to_string(),
                description: "Первый взнос меньше 50% от стоимости".to_string(),
            }
        );
        assert_eq!(breakdown_html(None), PLACEHOLDER);
        assert_eq!(schedule_html(None), PLACEHOLDER);
    }

    #[test]
    fn test_cards_with_result() {
        let result = result(dec!(5_000_000), dec!(0));

        let period = installment_period(Some(&result));
        assert_eq!(period.period, "31 месяцев");
        assert_eq!(period.end_date, "До август 2027 г.");

        let rate = interest_rate(Some(&result));
        assert_eq!(rate.rate, "10%");
        assert_eq!(rate.description, "Первый взнос меньше 50% от стоимости");
    }

    #[test]
    fn test_interest_free_description() {
        let rate = interest_rate(Some(&result(dec!(6_000_000), dec!(0))));
        assert_eq!(rate.rate, "0%");
        assert_eq!(rate.description, "Первый взнос больше 50% от стоимости");
    }

    #[test]
    fn test_breakdown_without_discount() {
        let html = breakdown_html(Some(&result(dec!(5_000_000), dec!(0))));

        assert!(html.contains("10\u{a0}000\u{a0}000 ₽"));
        assert!(!html.contains("Скидка"));
        assert!(html.contains("50.0%"));
        assert!(html.contains("Проценты за 31 месяцев:"));
        assert!(html.contains("694\u{a0}299 ₽"));
        assert!(html.contains("10\u{a0}694\u{a0}299 ₽"));
    }

    #[test]
    fn test_breakdown_with_discount() {
        let html = breakdown_html(Some(&result(dec!(4_500_000), dec!(10))));

        assert!(html.contains("Скидка (10%):"));
        assert!(html.contains("- 1\u{a0}000\u{a0}000 ₽"));
        assert!(html.contains("Стоимость с учетом скидки:"));
        assert!(html.contains("9\u{a0}000\u{a0}000 ₽"));
    }

    #[test]
    fn test_schedule() {
        let html = schedule_html(Some(&result(dec!(6_000_000), dec!(0))));

        assert!(html.contains("60.0% от стоимости"));
        assert!(html.contains("1\u{a0}550\u{a0}000 ₽"));
        assert!(html.contains("31 платежей по 50\u{a0}000 ₽"));
        assert!(html.contains("2\u{a0}450\u{a0}000 ₽"));
        assert!(html.contains("или перевести в ипотеку"));
    }

    #[test]
    fn test_full_discount_share() {
        let result = result(dec!(100_000), dec!(100));

        let breakdown = breakdown_html(Some(&result));
        assert!(breakdown.contains("Скидка (100%):"));
        assert!(breakdown.contains("∞%"));

        let schedule = schedule_html(Some(&result));
        assert!(schedule.contains("∞% от стоимости"));
        assert_eq!(interest_rate(Some(&result)).rate, "0%");
    }

    #[test]
    fn test_error_banner() {
        let below = CalculationError::BelowMinimumDownPayment {
            required: dec!(2_700_000),
        };
        assert_eq!(
            error_banner(&below).as_deref(),
            Some("Минимальный первый взнос: 2\u{a0}700\u{a0}000 ₽")
        );
        assert_eq!(
            error_banner(&CalculationError::invalid(crate::InputField::DownPayment)),
            None
        );
    }
}
