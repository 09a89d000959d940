//! Profiling configuration.
//!
//! One [`SectionParams`] per column kind: how many ranked rows to return,
//! whether missing values take part in the mode, and the chart styling that
//! is passed through to the renderer untouched. The whole record is validated
//! once when it is loaded; analyzers trust it afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::column::ColumnKind;
use crate::error::{ConfigError, Result};

/// Ranked rows returned when a section does not say otherwise.
pub const DEFAULT_TOP_FREQUENCY: usize = 20;

/// Chart styling for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    pub title: String,
    pub y_axis_label: String,
    pub axis_font_size: u32,
    pub tick_font_size: u32,
    pub template: String,
    pub category_order: String,
    /// Only used by histograms.
    pub max_bins: Option<usize>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Quantity per Value".to_string(),
            y_axis_label: "Quantity".to_string(),
            axis_font_size: 16,
            tick_font_size: 14,
            template: "simple_white".to_string(),
            category_order: "total descending".to_string(),
            max_bins: None,
        }
    }
}

impl PlotConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_y_axis_label(mut self, label: impl Into<String>) -> Self {
        self.y_axis_label = label.into();
        self
    }

    #[must_use]
    pub fn with_max_bins(mut self, bins: Option<usize>) -> Self {
        self.max_bins = bins;
        self
    }

    fn validate(&self, section: &str) -> Result<()> {
        if self.axis_font_size == 0 {
            return Err(ConfigError::invalid(
                format!("{section}.plot.axis_font_size"),
                "must be positive",
            ));
        }
        if self.tick_font_size == 0 {
            return Err(ConfigError::invalid(
                format!("{section}.plot.tick_font_size"),
                "must be positive",
            ));
        }
        if self.max_bins == Some(0) {
            return Err(ConfigError::invalid(
                format!("{section}.plot.max_bins"),
                "must be positive when set",
            ));
        }
        Ok(())
    }
}

/// Parameters of one column-kind section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionParams {
    pub top_frequency: usize,
    /// When false, missing entries compete in the mode like any other value.
    /// Frequency tables and their percentages always ignore missing entries.
    pub drop_missing: bool,
    pub plot: PlotConfig,
}

impl Default for SectionParams {
    fn default() -> Self {
        Self {
            top_frequency: DEFAULT_TOP_FREQUENCY,
            drop_missing: true,
            plot: PlotConfig::default(),
        }
    }
}

impl SectionParams {
    #[must_use]
    pub fn with_top_frequency(mut self, top_frequency: usize) -> Self {
        self.top_frequency = top_frequency;
        self
    }

    #[must_use]
    pub fn with_drop_missing(mut self, drop_missing: bool) -> Self {
        self.drop_missing = drop_missing;
        self
    }

    #[must_use]
    pub fn with_plot(mut self, plot: PlotConfig) -> Self {
        self.plot = plot;
        self
    }

    fn validate(&self, section: &str) -> Result<()> {
        if self.top_frequency == 0 {
            return Err(ConfigError::invalid(
                format!("{section}.top_frequency"),
                "must be a positive integer",
            ));
        }
        self.plot.validate(section)
    }
}

fn default_app_name() -> String {
    "Data Explorer".to_string()
}

fn default_numeric_section() -> SectionParams {
    SectionParams::default().with_plot(
        PlotConfig::default()
            .with_title("Histogram of Occurrences")
            .with_y_axis_label("Count")
            .with_max_bins(Some(50)),
    )
}

/// Complete configuration of a profiling pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_numeric_section")]
    pub numeric: SectionParams,
    #[serde(default)]
    pub text: SectionParams,
    #[serde(default)]
    pub datetime: SectionParams,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            numeric: default_numeric_section(),
            text: SectionParams::default(),
            datetime: SectionParams::default(),
        }
    }
}

impl ProfileConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] for malformed documents or unknown keys and
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Self::parse(contents, PathBuf::from("<inline>"))
    }

    fn parse(contents: &str, path: PathBuf) -> Result<Self> {
        let config: ProfileConfig =
            toml::from_str(contents).map_err(|source| ConfigError::Toml { path, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::invalid("app_name", "must not be empty"));
        }
        for kind in ColumnKind::ALL {
            self.section(kind).validate(kind.as_str())?;
        }
        Ok(())
    }

    /// Section parameters for a column kind.
    pub fn section(&self, kind: ColumnKind) -> &SectionParams {
        match kind {
            ColumnKind::Numeric => &self.numeric,
            ColumnKind::Text => &self.text,
            ColumnKind::Datetime => &self.datetime,
        }
    }
}

/// Loads and validates a TOML configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
/// errors of [`ProfileConfig::from_toml_str`].
pub fn load_config(path: &Path) -> Result<ProfileConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = ProfileConfig::parse(&contents, path.to_path_buf())?;
    Ok(config)
}
