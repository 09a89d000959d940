//! Dataset wrapper: a named table partitioned by column kind.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use dataprof_ingest::{dataset_name_from_path, read_csv_table};
use dataprof_model::ColumnKind;
use polars::prelude::*;
use tracing::{debug, warn};

use crate::analyzer::ColumnAnalyzer;
use crate::date_parse::parse_datetime_column;
use crate::datetime::DatetimeColumn;
use crate::error::{ProfileError, Result};
use crate::frame::{
    datetime_series, datetime_values, kind_of_dtype, numeric_values, row_keys, text_values,
};
use crate::numeric::NumericColumn;
use crate::text::TextColumn;

/// A loaded table together with the kind of every column.
///
/// The kinds are resolved from the polars dtypes when the dataset is built
/// and only change through [`Dataset::convert_columns_to_datetime`], which
/// returns a new dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    frame: DataFrame,
    kinds: Vec<(String, ColumnKind)>,
}

impl Dataset {
    pub fn new(name: impl Into<String>, frame: DataFrame) -> Self {
        let kinds = frame
            .get_columns()
            .iter()
            .map(|column| (column.name().to_string(), kind_of_dtype(column.dtype())))
            .collect();
        Self {
            name: name.into(),
            frame,
            kinds,
        }
    }

    /// Loads a CSV file; the dataset is named after the file.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let frame = read_csv_table(path)?;
        Ok(Self::new(dataset_name_from_path(path), frame))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn column_names(&self) -> Vec<String> {
        self.kinds.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    pub fn column_count(&self) -> usize {
        self.frame.width()
    }

    pub fn column_kind(&self, name: &str) -> Option<ColumnKind> {
        self.kinds
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, kind)| *kind)
    }

    pub fn column_types(&self) -> BTreeMap<String, ColumnKind> {
        self.kinds.iter().cloned().collect()
    }

    /// Polars dtype of every column, in column order.
    pub fn column_dtypes(&self) -> Vec<(String, String)> {
        self.frame
            .get_columns()
            .iter()
            .map(|column| (column.name().to_string(), column.dtype().to_string()))
            .collect()
    }

    fn columns_of(&self, kind: ColumnKind) -> Vec<String> {
        self.kinds
            .iter()
            .filter(|(_, column_kind)| *column_kind == kind)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn numeric_columns(&self) -> Vec<String> {
        self.columns_of(ColumnKind::Numeric)
    }

    pub fn text_columns(&self) -> Vec<String> {
        self.columns_of(ColumnKind::Text)
    }

    pub fn datetime_columns(&self) -> Vec<String> {
        self.columns_of(ColumnKind::Datetime)
    }

    /// Rows that repeat an earlier row exactly, nulls comparing equal.
    pub fn duplicate_row_count(&self) -> Result<usize> {
        let mut seen = HashSet::new();
        Ok(row_keys(&self.frame)?
            .into_iter()
            .filter(|key| !seen.insert(key.clone()))
            .count())
    }

    /// Rows with at least one missing field.
    pub fn rows_with_missing_count(&self) -> Result<usize> {
        Ok(row_keys(&self.frame)?
            .iter()
            .filter(|key| key.iter().any(Option::is_none))
            .count())
    }

    fn with_frame(&self, frame: DataFrame) -> Self {
        Self {
            name: self.name.clone(),
            frame,
            kinds: self.kinds.clone(),
        }
    }

    /// First `n` rows.
    pub fn head(&self, n: usize) -> Self {
        self.with_frame(self.frame.head(Some(n)))
    }

    /// Last `n` rows.
    pub fn tail(&self, n: usize) -> Self {
        self.with_frame(self.frame.tail(Some(n)))
    }

    /// `n` rows drawn without replacement; the whole dataset when `n` covers it.
    pub fn sample(&self, n: usize, seed: Option<u64>) -> Result<Self> {
        if n >= self.row_count() {
            return Ok(self.clone());
        }
        let frame = self.frame.sample_n_literal(n, false, false, seed)?;
        Ok(self.with_frame(frame))
    }

    fn require(&self, name: &str, expected: ColumnKind) -> Result<&Column> {
        let actual = self
            .column_kind(name)
            .ok_or_else(|| ProfileError::ColumnNotFound {
                column: name.to_string(),
            })?;
        if actual != expected {
            return Err(ProfileError::KindMismatch {
                column: name.to_string(),
                expected,
                actual,
            });
        }
        Ok(self.frame.column(name)?)
    }

    pub fn numeric_column(&self, name: &str) -> Result<NumericColumn> {
        let column = self.require(name, ColumnKind::Numeric)?;
        Ok(NumericColumn::new(name, numeric_values(column)?))
    }

    pub fn text_column(&self, name: &str) -> Result<TextColumn> {
        let column = self.require(name, ColumnKind::Text)?;
        Ok(TextColumn::new(name, text_values(column)?))
    }

    pub fn datetime_column(&self, name: &str) -> Result<DatetimeColumn> {
        let column = self.require(name, ColumnKind::Datetime)?;
        Ok(DatetimeColumn::new(name, datetime_values(column)?))
    }

    /// Builds the analyzer matching the kind of column `name`.
    pub fn analyzer(&self, name: &str) -> Result<ColumnAnalyzer> {
        let kind = self
            .column_kind(name)
            .ok_or_else(|| ProfileError::ColumnNotFound {
                column: name.to_string(),
            })?;
        debug!(column = name, %kind, "Routing column");
        Ok(match kind {
            ColumnKind::Numeric => ColumnAnalyzer::Numeric(self.numeric_column(name)?),
            ColumnKind::Text => ColumnAnalyzer::Text(self.text_column(name)?),
            ColumnKind::Datetime => ColumnAnalyzer::Datetime(self.datetime_column(name)?),
        })
    }

    /// One analyzer per column, in column order.
    pub fn analyzers(&self) -> Result<Vec<ColumnAnalyzer>> {
        self.kinds
            .iter()
            .map(|(name, _)| self.analyzer(name))
            .collect()
    }

    /// Reinterprets the named text columns as datetimes.
    ///
    /// A column is converted only when every non-blank value parses; blank
    /// values become missing. Columns that are unknown, not text, or hold an
    /// unparsable value are left as they are. Column order and row count never
    /// change.
    pub fn convert_columns_to_datetime<S: AsRef<str>>(&self, names: &[S]) -> Self {
        let mut converted = self.clone();
        for name in names {
            let name = name.as_ref();
            match self.column_kind(name) {
                None => warn!(column = name, "Cannot convert unknown column to datetime"),
                Some(ColumnKind::Text) => {
                    if let Err(err) = converted.convert_text_column(name) {
                        debug!(column = name, error = %err, "Column kept as text");
                    }
                }
                Some(kind) => {
                    debug!(column = name, %kind, "Only text columns are converted to datetime");
                }
            }
        }
        converted
    }

    fn convert_text_column(&mut self, name: &str) -> Result<()> {
        let values = text_values(self.frame.column(name)?)?;
        let Some(parsed) = parse_datetime_column(&values) else {
            debug!(column = name, "Column has values that are not dates");
            return Ok(());
        };
        self.frame.with_column(datetime_series(name, &parsed)?)?;
        for (column, kind) in &mut self.kinds {
            if column == name {
                *kind = ColumnKind::Datetime;
            }
        }
        debug!(column = name, "Converted column to datetime");
        Ok(())
    }
}
