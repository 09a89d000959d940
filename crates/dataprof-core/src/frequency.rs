//! Frequency summarizer shared by every column analyzer.
//!
//! Missing entries never enter the distinct-value domain: they are not
//! ranked, not counted as distinct and not part of the percentage
//! denominator. Equal occurrence counts are ordered by value ascending, so a
//! table is fully deterministic for a given column.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use dataprof_model::{Column, FrequencyRow, FrequencyTable, round_percentage};

/// Total order over column values used for grouping and tie-breaking.
pub trait FrequencyKey: Clone {
    fn key_cmp(&self, other: &Self) -> Ordering;
}

impl FrequencyKey for f64 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        // -0.0 and 0.0 are the same value
        let normalize = |v: f64| if v == 0.0 { 0.0 } else { v };
        normalize(*self).total_cmp(&normalize(*other))
    }
}

impl FrequencyKey for i64 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl FrequencyKey for bool {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl FrequencyKey for String {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl FrequencyKey for NaiveDate {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl FrequencyKey for NaiveDateTime {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

/// Distinct non-missing values in ascending order with their counts.
fn grouped<T: FrequencyKey>(values: &[Option<T>]) -> Vec<(T, usize)> {
    let mut present: Vec<&T> = values.iter().flatten().collect();
    present.sort_by(|a, b| a.key_cmp(b));

    let mut groups: Vec<(T, usize)> = Vec::new();
    for value in present {
        match groups.last_mut() {
            Some((last, count)) if last.key_cmp(value) == Ordering::Equal => *count += 1,
            _ => groups.push((value.clone(), 1)),
        }
    }
    groups
}

/// Number of distinct non-missing values.
pub fn distinct_count<T: FrequencyKey>(values: &[Option<T>]) -> usize {
    let mut present: Vec<&T> = values.iter().flatten().collect();
    present.sort_by(|a, b| a.key_cmp(b));
    present.dedup_by(|a, b| a.key_cmp(b) == Ordering::Equal);
    present.len()
}

/// Every distinct non-missing value with its occurrence count, most frequent
/// first and ties by value ascending.
pub fn value_counts<T: FrequencyKey>(values: &[Option<T>]) -> Vec<(T, usize)> {
    let mut counts = grouped(values);
    // stable: equal counts keep the ascending value order from `grouped`
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Ranks the values of `column` and keeps the `n_head` most frequent.
///
/// Percentages are `occurrence / non_missing`, rounded to four decimals, so
/// the percentages of the untruncated table sum to one up to rounding.
pub fn frequent_values<T: FrequencyKey>(column: &Column<T>, n_head: usize) -> FrequencyTable<T> {
    frequency_table(column.values(), n_head)
}

/// Same as [`frequent_values`] over a raw value slice.
pub fn frequency_table<T: FrequencyKey>(values: &[Option<T>], n_head: usize) -> FrequencyTable<T> {
    let counts = value_counts(values);
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return FrequencyTable::default();
    }
    let rows = counts
        .into_iter()
        .map(|(value, occurrence)| FrequencyRow {
            value,
            occurrence,
            percentage: round_percentage(occurrence as f64 / total as f64),
        })
        .collect();
    FrequencyTable::new(rows).truncated(n_head)
}
