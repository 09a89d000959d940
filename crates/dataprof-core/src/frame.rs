//! Polars column extraction and cell formatting.

use chrono::{DateTime, NaiveDateTime};
use dataprof_model::ColumnKind;
use polars::prelude::*;

use crate::error::Result;

/// Semantic kind of a polars dtype.
///
/// Integers and floats are numeric, dates and timestamps are datetime, and
/// everything else (strings, booleans, nulls, times of day) is text.
pub fn kind_of_dtype(dtype: &DataType) -> ColumnKind {
    if dtype.is_integer() || dtype.is_float() {
        ColumnKind::Numeric
    } else if matches!(dtype, DataType::Date | DataType::Datetime(_, _)) {
        ColumnKind::Datetime
    } else {
        ColumnKind::Text
    }
}

pub fn numeric_values(column: &Column) -> Result<Vec<Option<f64>>> {
    let cast = column.cast(&DataType::Float64)?;
    Ok(cast.f64()?.iter().collect())
}

pub fn text_values(column: &Column) -> Result<Vec<Option<String>>> {
    let cast = column.cast(&DataType::String)?;
    Ok(cast
        .str()?
        .iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

pub fn datetime_values(column: &Column) -> Result<Vec<Option<NaiveDateTime>>> {
    let micros = column
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?
        .cast(&DataType::Int64)?;
    Ok(micros
        .i64()?
        .iter()
        .map(|value| value.and_then(from_micros))
        .collect())
}

fn from_micros(micros: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros).map(|value| value.naive_utc())
}

/// Builds a microsecond datetime column named `name`.
pub fn datetime_series(name: &str, values: &[Option<NaiveDateTime>]) -> Result<Series> {
    let micros: Vec<Option<i64>> = values
        .iter()
        .map(|value| value.map(|v| v.and_utc().timestamp_micros()))
        .collect();
    let series = Series::new(name.into(), micros)
        .cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;
    Ok(series)
}

/// Every row of `df` as a list of cell strings, `None` marking a null cell.
pub fn row_keys(df: &DataFrame) -> Result<Vec<Vec<Option<String>>>> {
    let columns = df
        .get_columns()
        .iter()
        .map(text_values)
        .collect::<Result<Vec<_>>>()?;
    Ok((0..df.height())
        .map(|row| columns.iter().map(|column| column[row].clone()).collect())
        .collect())
}

/// Converts a Polars `AnyValue` to display text; nulls become an empty string.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => {
            let s = other.to_string();
            // strip the quotes polars puts around some values
            if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
                s[1..s.len() - 1].to_string()
            } else {
                s
            }
        }
    }
}

fn cell_text(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Formats a float without trailing zeros after the decimal point.
///
/// Integer-valued floats like `40.0` print as `"40"`; NaN prints as `"NaN"`.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Renders the data rows of `df` as display strings, `None` marking a null cell.
pub fn frame_rows(df: &DataFrame) -> Result<Vec<Vec<Option<String>>>> {
    let mut rows = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let cells = df
            .get_columns()
            .iter()
            .map(|column| column.get(row).map(cell_text))
            .collect::<PolarsResult<Vec<_>>>()?;
        rows.push(cells);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn dtype_kinds() {
        assert_eq!(kind_of_dtype(&DataType::Int64), ColumnKind::Numeric);
        assert_eq!(kind_of_dtype(&DataType::Float32), ColumnKind::Numeric);
        assert_eq!(kind_of_dtype(&DataType::UInt8), ColumnKind::Numeric);
        assert_eq!(kind_of_dtype(&DataType::Date), ColumnKind::Datetime);
        assert_eq!(
            kind_of_dtype(&DataType::Datetime(TimeUnit::Milliseconds, None)),
            ColumnKind::Datetime
        );
        assert_eq!(kind_of_dtype(&DataType::String), ColumnKind::Text);
        assert_eq!(kind_of_dtype(&DataType::Boolean), ColumnKind::Text);
        assert_eq!(kind_of_dtype(&DataType::Null), ColumnKind::Text);
    }

    #[test]
    fn extracts_typed_values() {
        let df = df! {
            "n" => [Some(1i64), None, Some(3)],
            "s" => [Some("a"), Some("b"), None],
        }
        .unwrap();
        assert_eq!(
            numeric_values(df.column("n").unwrap()).unwrap(),
            vec![Some(1.0), None, Some(3.0)]
        );
        assert_eq!(
            text_values(df.column("s").unwrap()).unwrap(),
            vec![Some("a".to_string()), Some("b".to_string()), None]
        );
    }

    #[test]
    fn datetime_series_round_trips() {
        let stamp = NaiveDate::from_ymd_opt(2021, 6, 30)
            .unwrap()
            .and_hms_micro_opt(8, 15, 0, 125)
            .unwrap();
        let series = datetime_series("at", &[Some(stamp), None]).unwrap();
        let values = datetime_values(&series.into_column()).unwrap();
        assert_eq!(values, vec![Some(stamp), None]);
    }

    #[test]
    fn row_keys_mark_nulls() {
        let df = df! {
            "a" => [Some(1i64), Some(1)],
            "b" => [Some("x"), None],
        }
        .unwrap();
        let keys = row_keys(&df).unwrap();
        assert_eq!(keys[0], vec![Some("1".to_string()), Some("x".to_string())]);
        assert_eq!(keys[1], vec![Some("1".to_string()), None]);
    }

    #[test]
    fn frame_rows_keep_nulls_apart_from_empty_strings() {
        let df = df! {
            "a" => [1i64, 2],
            "b" => [None, Some("")],
        }
        .unwrap();
        let rows = frame_rows(&df).unwrap();
        assert_eq!(rows[0], vec![Some("1".to_string()), None]);
        assert_eq!(rows[1], vec![Some("2".to_string()), Some(String::new())]);
    }

    #[test]
    fn formats_numbers_without_trailing_zeros() {
        assert_eq!(format_numeric(40.0), "40");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
        assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
    }
}
