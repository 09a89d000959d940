//! Ranked frequency tables.

use serde::Serialize;

/// Decimal places kept on normalized percentages.
pub const PERCENTAGE_DECIMALS: i32 = 4;

/// Rounds a fraction to [`PERCENTAGE_DECIMALS`] decimal places.
pub fn round_percentage(fraction: f64) -> f64 {
    let scale = 10f64.powi(PERCENTAGE_DECIMALS);
    (fraction * scale).round() / scale
}

/// One ranked entry: a distinct value, how often it occurs and its share of
/// the non-missing entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow<T> {
    pub value: T,
    pub occurrence: usize,
    pub percentage: f64,
}

/// Distinct values ranked by occurrence, most frequent first.
///
/// Rows are produced by the frequency summarizer; this type only guards the
/// shape and offers read access.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable<T> {
    rows: Vec<FrequencyRow<T>>,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T> FrequencyTable<T> {
    pub fn new(rows: Vec<FrequencyRow<T>>) -> Self {
        debug_assert!(
            rows.windows(2)
                .all(|pair| pair[0].occurrence >= pair[1].occurrence),
            "frequency rows must be ranked by occurrence"
        );
        Self { rows }
    }

    pub fn rows(&self) -> &[FrequencyRow<T>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyRow<T>> {
        self.rows.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|row| &row.value)
    }

    pub fn occurrences(&self) -> Vec<usize> {
        self.rows.iter().map(|row| row.occurrence).collect()
    }

    pub fn total_occurrence(&self) -> usize {
        self.rows.iter().map(|row| row.occurrence).sum()
    }

    pub fn percentage_sum(&self) -> f64 {
        self.rows.iter().map(|row| row.percentage).sum()
    }

    /// Keeps the first `n` rows.
    #[must_use]
    pub fn truncated(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    /// Converts every value, e.g. into display strings, keeping rank and counts.
    pub fn map_values<U>(self, mut f: impl FnMut(T) -> U) -> FrequencyTable<U> {
        FrequencyTable {
            rows: self
                .rows
                .into_iter()
                .map(|row| FrequencyRow {
                    value: f(row.value),
                    occurrence: row.occurrence,
                    percentage: row.percentage,
                })
                .collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a FrequencyTable<T> {
    type Item = &'a FrequencyRow<T>;
    type IntoIter = std::slice::Iter<'a, FrequencyRow<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
