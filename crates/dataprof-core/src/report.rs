//! Profile reports: the labeled metrics, ranked values and chart of every
//! column, plus a dataset overview.
//!
//! Statistics that have no value on a column are reported as
//! [`MetricValue::Undefined`]; building a report never fails because a
//! column is empty.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use dataprof_model::{ChartSpec, ColumnKind, FrequencyTable, ProfileConfig, SectionParams};
use serde::Serialize;

use crate::analyzer::{ColumnAnalyzer, ColumnStats};
use crate::dataset::Dataset;
use crate::datetime::{DATETIME_DISPLAY_FORMAT, DatetimeColumn};
use crate::error::Result;
use crate::frame::format_numeric;
use crate::numeric::NumericColumn;
use crate::text::TextColumn;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Number(f64),
    Text(String),
    /// Missing entries are the most frequent "value".
    Missing,
    Undefined,
}

impl MetricValue {
    fn number(value: f64) -> Self {
        if value.is_finite() {
            MetricValue::Number(value)
        } else {
            MetricValue::Undefined
        }
    }

    fn datetime(value: Option<NaiveDateTime>) -> Self {
        value.map_or(MetricValue::Undefined, |value| {
            MetricValue::Text(value.format(DATETIME_DISPLAY_FORMAT).to_string())
        })
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, MetricValue::Undefined)
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(count) => write!(f, "{count}"),
            MetricValue::Number(value) => {
                write!(f, "{}", format_numeric((value * 10_000.0).round() / 10_000.0))
            }
            MetricValue::Text(text) => write!(f, "{text}"),
            MetricValue::Missing => write!(f, "<missing>"),
            MetricValue::Undefined => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: MetricValue,
}

fn metric(label: &'static str, value: MetricValue) -> Metric {
    Metric { label, value }
}

fn count(label: &'static str, value: usize) -> Metric {
    metric(label, MetricValue::Count(value))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnType {
    pub name: String,
    pub dtype: String,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetOverview {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    pub duplicate_rows: usize,
    pub rows_with_missing: usize,
    pub column_types: Vec<ColumnType>,
}

impl DatasetOverview {
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let column_types = dataset
            .column_dtypes()
            .into_iter()
            .map(|(name, dtype)| {
                let kind = dataset.column_kind(&name).unwrap_or(ColumnKind::Text);
                ColumnType { name, dtype, kind }
            })
            .collect();
        Ok(Self {
            name: dataset.name().to_string(),
            rows: dataset.row_count(),
            columns: dataset.column_count(),
            duplicate_rows: dataset.duplicate_row_count()?,
            rows_with_missing: dataset.rows_with_missing_count()?,
            column_types,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub kind: ColumnKind,
    pub metrics: Vec<Metric>,
    pub frequent_values: FrequencyTable<String>,
    pub chart: ChartSpec,
}

fn numeric_metrics(column: &NumericColumn) -> Vec<Metric> {
    vec![
        count("Number of Unique Values", column.unique_count()),
        count("Number of Rows with Missing Values", column.missing_count()),
        count("Number of Rows with 0", column.zero_count()),
        count("Number of Rows with Negative Values", column.negative_count()),
        metric("Average Value", MetricValue::number(column.mean())),
        metric("Standard Deviation Value", MetricValue::number(column.std())),
        metric("Minimum Value", MetricValue::number(column.min())),
        metric("Maximum Value", MetricValue::number(column.max())),
        metric("Median Value", MetricValue::number(column.median())),
    ]
}

fn text_metrics(column: &TextColumn, drop_missing: bool) -> Vec<Metric> {
    let mode = match column.mode(drop_missing) {
        Ok(Some(value)) => MetricValue::Text(value.to_string()),
        Ok(None) => MetricValue::Missing,
        Err(_) => MetricValue::Undefined,
    };
    vec![
        count("Number of Unique Values", column.unique_count()),
        count("Number of Rows with Missing Values", column.missing_count()),
        count("Number of Empty Rows", column.empty_count()),
        count("Number of Rows with Only Whitespace", column.whitespace_count()),
        count("Number of Rows with Only Lowercases", column.lowercase_count()),
        count("Number of Rows with Only Uppercases", column.uppercase_count()),
        count("Number of Rows with Only Alphabet", column.alphabetic_count()),
        count("Number of Rows with Only Digits", column.digit_count()),
        metric("Mode Value", mode),
    ]
}

fn datetime_metrics(column: &DatetimeColumn, now: NaiveDateTime) -> Vec<Metric> {
    vec![
        count("Number of Unique Values", column.unique_count()),
        count("Number of Rows with Missing Values", column.missing_count()),
        count("Number of Weekend Dates", column.weekend_count()),
        count("Number of Weekday Dates", column.weekday_count()),
        count("Number of Dates in Future", column.future_count_at(now)),
        count("Number of Rows with 1900-01-01", column.count_1900()),
        count("Number of Rows with 1970-01-01", column.count_1970()),
        metric("Minimum Value", MetricValue::datetime(column.min())),
        metric("Maximum Value", MetricValue::datetime(column.max())),
    ]
}

impl ColumnReport {
    /// Builds the report of one analyzed column using its section parameters.
    pub fn build(analyzer: &ColumnAnalyzer, params: &SectionParams, now: NaiveDateTime) -> Self {
        let metrics = match analyzer {
            ColumnAnalyzer::Numeric(column) => numeric_metrics(column),
            ColumnAnalyzer::Text(column) => text_metrics(column, params.drop_missing),
            ColumnAnalyzer::Datetime(column) => datetime_metrics(column, now),
        };
        Self {
            name: analyzer.name().to_string(),
            kind: analyzer.kind(),
            metrics,
            frequent_values: analyzer.frequent_values_display(params.top_frequency),
            chart: analyzer.chart(params),
        }
    }

    pub fn metric(&self, label: &str) -> Option<&MetricValue> {
        self.metrics
            .iter()
            .find(|metric| metric.label == label)
            .map(|metric| &metric.value)
    }
}

/// Everything shown for one dataset, sections in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetProfile {
    pub app_name: String,
    pub overview: DatasetOverview,
    pub numeric: Vec<ColumnReport>,
    pub text: Vec<ColumnReport>,
    pub datetime: Vec<ColumnReport>,
}

impl DatasetProfile {
    pub fn section(&self, kind: ColumnKind) -> &[ColumnReport] {
        match kind {
            ColumnKind::Numeric => &self.numeric,
            ColumnKind::Text => &self.text,
            ColumnKind::Datetime => &self.datetime,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnReport> {
        ColumnKind::ALL
            .iter()
            .flat_map(|kind| self.section(*kind))
            .find(|report| report.name == name)
    }
}

/// Profiles every column, counting future dates against the local clock.
pub fn profile_dataset(dataset: &Dataset, config: &ProfileConfig) -> Result<DatasetProfile> {
    profile_dataset_at(dataset, config, Local::now().naive_local())
}

/// Profiles every column with `now` as the reference time for future dates.
pub fn profile_dataset_at(
    dataset: &Dataset,
    config: &ProfileConfig,
    now: NaiveDateTime,
) -> Result<DatasetProfile> {
    let mut profile = DatasetProfile {
        app_name: config.app_name.clone(),
        overview: DatasetOverview::from_dataset(dataset)?,
        numeric: Vec::new(),
        text: Vec::new(),
        datetime: Vec::new(),
    };
    for analyzer in dataset.analyzers()? {
        let kind = analyzer.kind();
        let report = ColumnReport::build(&analyzer, config.section(kind), now);
        match kind {
            ColumnKind::Numeric => profile.numeric.push(report),
            ColumnKind::Text => profile.text.push(report),
            ColumnKind::Datetime => profile.datetime.push(report),
        }
    }
    tracing::info!(
        dataset = dataset.name(),
        numeric = profile.numeric.len(),
        text = profile.text.len(),
        datetime = profile.datetime.len(),
        "Profiled dataset"
    );
    Ok(profile)
}
