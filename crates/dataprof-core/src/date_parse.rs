//! Text to datetime parsing for explicit column conversion.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts tried in order after RFC 3339.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts; parsed values sit at midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parses one trimmed, non-empty value.
///
/// Values carrying a UTC offset are converted to UTC and stored naive.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Parses a whole text column, blanks becoming missing.
///
/// Returns `None` as soon as a present, non-blank value does not parse, so a
/// column is either converted completely or not at all.
pub fn parse_datetime_column(values: &[Option<String>]) -> Option<Vec<Option<NaiveDateTime>>> {
    values
        .iter()
        .map(|value| match value.as_deref().map(str::trim) {
            None | Some("") => Some(None),
            Some(text) => parse_datetime(text).map(Some),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn accepts_supported_layouts() {
        let midnight = ymd_hms(2024, 3, 9, 0, 0, 0);
        assert_eq!(parse_datetime("2024-03-09"), Some(midnight));
        assert_eq!(parse_datetime("2024/03/09"), Some(midnight));
        assert_eq!(parse_datetime("03/09/2024"), Some(midnight));
        assert_eq!(parse_datetime("09.03.2024"), Some(midnight));
        assert_eq!(
            parse_datetime("2024-03-09T14:30:05"),
            Some(ymd_hms(2024, 3, 9, 14, 30, 5))
        );
        assert_eq!(
            parse_datetime(" 2024-03-09 14:30 "),
            Some(ymd_hms(2024, 3, 9, 14, 30, 0))
        );
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        assert_eq!(
            parse_datetime("2024-03-09T14:30:00+02:00"),
            Some(ymd_hms(2024, 3, 9, 12, 30, 0))
        );
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let parsed = parse_datetime("2024-03-09 14:30:05.250").unwrap();
        assert_eq!(parsed.and_utc().timestamp_subsec_millis(), 250);
    }

    #[test]
    fn rejects_free_text() {
        assert_eq!(parse_datetime("tomorrow"), None);
        assert_eq!(parse_datetime("2024-13-45"), None);
        assert_eq!(parse_datetime("   "), None);
    }

    #[test]
    fn column_conversion_is_all_or_nothing() {
        let ok = vec![Some("2024-01-01".to_string()), Some(" ".to_string()), None];
        let parsed = parse_datetime_column(&ok).unwrap();
        assert_eq!(parsed[0], Some(ymd_hms(2024, 1, 1, 0, 0, 0)));
        assert_eq!(parsed[1], None);
        assert_eq!(parsed[2], None);

        let bad = vec![Some("2024-01-01".to_string()), Some("n/a".to_string())];
        assert!(parse_datetime_column(&bad).is_none());
    }
}
