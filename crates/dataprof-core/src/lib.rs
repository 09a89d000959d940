//! Column statistics and frequency summarization.
//!
//! A [`Dataset`] partitions a loaded table by column kind and hands each
//! column to the analyzer of that kind: [`NumericColumn`], [`TextColumn`] or
//! [`DatetimeColumn`]. Every analyzer ranks its values through the shared
//! frequency summarizer in [`frequency`]. The [`report`] module assembles the
//! results into serializable per-column reports.

pub mod analyzer;
pub mod date_parse;
pub mod dataset;
pub mod datetime;
pub mod error;
pub mod frame;
pub mod frequency;
pub mod numeric;
pub mod report;
pub mod text;

pub use analyzer::{ColumnAnalyzer, ColumnStats};
pub use date_parse::parse_datetime;
pub use dataset::Dataset;
pub use datetime::{DATETIME_DISPLAY_FORMAT, DatetimeColumn, SENTINEL_DATES};
pub use error::{ProfileError, Result};
pub use frequency::{FrequencyKey, distinct_count, frequency_table, frequent_values, value_counts};
pub use numeric::NumericColumn;
pub use report::{
    ColumnReport, ColumnType, DatasetOverview, DatasetProfile, Metric, MetricValue,
    profile_dataset, profile_dataset_at,
};
pub use text::TextColumn;
