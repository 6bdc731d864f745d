use chrono::NaiveDate;
use rstest::rstest;
use ru_installment::input::format_input_field;
use ru_installment::{RawInput, View, render};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

#[test]
fn test_page_with_result() {
    let raw = RawInput::new(
        format_input_field("10000000"),
        format_input_field("5000000"),
        "0",
    );
    let view = View::recalculate(&raw, today());
    let html = render::page(&view);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(
        r#"<div id="installmentPeriod" class="text-xl font-semibold">31 месяцев</div>"#
    ));
    assert!(html.contains("До август 2027 г."));
    assert!(html.contains(r#"<div id="interestRate" class="text-xl font-semibold">10%</div>"#));
    assert!(html.contains(r#"class="bg-red-50 text-red-700 rounded-lg p-4 hidden""#));
    assert!(html.contains("Итоговая стоимость:"));
    assert!(html.contains("10\u{a0}694\u{a0}299 ₽"));
}

#[test]
fn test_page_with_banner() {
    let raw = RawInput::new("10 000 000", "2 000 000", "10");
    let html = render::page(&View::recalculate(&raw, today()));

    assert!(html.contains(r#"class="bg-red-50 text-red-700 rounded-lg p-4""#));
    assert!(html.contains("Минимальный первый взнос: 2\u{a0}700\u{a0}000 ₽"));
    assert!(html.contains("Рассчитывается автоматически"));
    assert!(html.contains("До августа 2027 года"));
    assert!(html.contains("Введите данные для расчета"));
}

#[rstest]
#[case("", "", "")]
#[case("10 000 000", "", "")]
#[case("", "5 000 000", "")]
#[case("abc", "5 000 000", "5")]
fn test_incomplete_fields_show_placeholders(
    #[case] cost: &str,
    #[case] down_payment: &str,
    #[case] discount: &str,
) {
    let view = View::recalculate(&RawInput::new(cost, down_payment, discount), today());
    assert!(view.is_empty());
    assert_eq!(view.error, None);

    let html = render::page(&view);
    assert_eq!(html.matches("Введите данные для расчета").count(), 2);
}

#[test]
fn test_view_serializes_to_json() {
    let view = View::recalculate(&RawInput::new("10 000 000", "6 000 000", ""), today());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["error"], serde_json::Value::Null);
    assert_eq!(json["result"]["number_of_payments"], 31);
    assert_eq!(json["result"]["interest_rate"], "0");
}
