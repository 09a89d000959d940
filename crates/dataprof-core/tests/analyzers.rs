//! Tests for the numeric, text and datetime analyzers.

use chrono::{NaiveDate, NaiveDateTime};
use dataprof_core::{DatetimeColumn, NumericColumn, TextColumn};
use dataprof_model::PlotConfig;

fn text_column(values: &[Option<&str>]) -> TextColumn {
    TextColumn::new(
        "comment",
        values.iter().map(|v| v.map(str::to_string)).collect(),
    )
}

fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

#[test]
fn test_numeric_reference_column() {
    let column = NumericColumn::new(
        "amount",
        vec![
            Some(1.1),
            Some(2.2),
            Some(0.0),
            Some(3.3),
            Some(0.0),
            Some(4.4),
            Some(5.5),
            Some(5.5),
            None,
        ],
    );

    assert_eq!(column.unique_count(), 6);
    assert_eq!(column.missing_count(), 1);
    assert_eq!(column.zero_count(), 2);
    assert_eq!(column.negative_count(), 0);
    assert!((column.mean() - 2.75).abs() < 1e-9);
    assert!((column.median() - 2.75).abs() < 1e-9);
    assert!(column.min() <= column.median() && column.median() <= column.max());

    let top = column.frequent_values(3);
    assert_eq!(top.len(), 3);
    // 0.0 and 5.5 both occur twice; the smaller value ranks first
    assert_eq!(top.rows()[0].value, 0.0);
    assert_eq!(top.rows()[1].value, 5.5);
    assert_eq!(top.rows()[0].percentage, 0.25);
    assert_eq!(top.rows()[2].percentage, 0.125);
}

#[test]
fn test_numeric_negatives_and_signed_zero() {
    let column = NumericColumn::new("delta", vec![Some(-2.0), Some(-0.0), Some(0.0), Some(3.0)]);
    assert_eq!(column.negative_count(), 1);
    assert_eq!(column.zero_count(), 2);
    assert_eq!(column.unique_count(), 3);
}

#[test]
fn test_text_reference_column() {
    let column = text_column(&[
        Some(""),
        Some("cc"),
        Some("cc"),
        Some("  "),
        Some("saaS"),
        Some("DDWW"),
        Some("cccc ccc"),
        Some("123"),
        Some("ff"),
        Some("ff"),
        Some(" "),
        None,
    ]);

    assert_eq!(column.unique_count(), 9);
    assert_eq!(column.missing_count(), 1);
    assert_eq!(column.empty_count(), 1);
    assert_eq!(column.whitespace_count(), 2);
    assert_eq!(column.lowercase_count(), 5);
    assert_eq!(column.uppercase_count(), 1);
    assert_eq!(column.alphabetic_count(), 6);
    assert_eq!(column.digit_count(), 1);
    assert_eq!(column.mode(true).unwrap(), Some("cc"));
    assert_eq!(column.mode(false).unwrap(), Some("cc"));

    let top = column.frequent_values(2);
    let values: Vec<&str> = top.values().map(String::as_str).collect();
    assert_eq!(values, vec!["cc", "ff"]);
    assert_eq!(top.rows()[0].percentage, 0.1818);
}

#[test]
fn test_text_empty_column() {
    let column = text_column(&[]);
    assert_eq!(column.unique_count(), 0);
    assert_eq!(column.empty_count(), 0);
    assert_eq!(column.lowercase_count(), 0);
    assert!(column.frequent_values(20).is_empty());
    let err = column.mode(true).unwrap_err();
    assert!(err.is_undefined());
    assert!(err.to_string().contains("comment"));
}

#[test]
fn test_text_bar_chart_uses_plot_config() {
    let column = text_column(&[Some("x"), Some("y"), Some("y")]);
    let plot = PlotConfig::default().with_title("Quantity per Value");
    let spec = column.bar_chart(&plot);
    assert_eq!(spec.title, "Quantity per Value");
    assert_eq!(spec.categories, vec!["y", "x"]);
    assert_eq!(spec.quantities, vec![2, 1]);
    assert_eq!(spec.y_axis.title_font_size, 16);
    assert_eq!(spec.x_axis.tick_font_size, 14);
}

#[test]
fn test_datetime_counts() {
    let column = DatetimeColumn::new(
        "visit",
        vec![
            Some(date(2023, 12, 30)),
            Some(date(2023, 12, 31)),
            Some(date(2024, 1, 1)),
            Some(date(2024, 1, 1)),
            Some(date(1900, 1, 1)),
            Some(date(2099, 5, 5)),
            None,
        ],
    );

    assert_eq!(column.unique_count(), 5);
    assert_eq!(column.missing_count(), 1);
    assert_eq!(column.weekend_count(), 2);
    assert_eq!(column.weekday_count(), 4);
    assert_eq!(column.future_count_at(date(2024, 6, 1)), 1);
    assert_eq!(column.count_1900(), 1);
    assert_eq!(column.count_1970(), 0);
    assert_eq!(column.min(), Some(date(1900, 1, 1)));
    assert_eq!(column.max(), Some(date(2099, 5, 5)));

    let top = column.frequent_values(1);
    assert_eq!(top.rows()[0].value, date(2024, 1, 1));
    assert_eq!(top.rows()[0].occurrence, 2);
    assert_eq!(top.rows()[0].percentage, 0.3333);
}

#[test]
fn test_datetime_future_uses_clock() {
    let column = DatetimeColumn::new("due", vec![Some(date(9999, 1, 1)), Some(date(1999, 1, 1))]);
    assert_eq!(column.future_count(), 1);
}
