//! Data model shared by the profiling crates.
//!
//! Everything in here is plain data: typed columns, the column kind tag,
//! ranked frequency tables, chart parameter records and the validated
//! configuration loaded from TOML.

pub mod chart;
pub mod column;
pub mod config;
pub mod error;
pub mod frequency;

pub use chart::{AxisSpec, BarChartSpec, ChartSpec, HistogramSpec};
pub use column::{Column, ColumnKind};
pub use config::{
    DEFAULT_TOP_FREQUENCY, PlotConfig, ProfileConfig, SectionParams, load_config,
};
pub use error::{ConfigError, Result};
pub use frequency::{FrequencyRow, FrequencyTable, round_percentage};
