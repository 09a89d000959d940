//! Chart parameter records handed to an external renderer.
//!
//! The profiler never draws anything. It only decides which series to plot
//! and passes the styling from [`PlotConfig`](crate::PlotConfig) through.

use serde::Serialize;

/// Title and font sizes for one chart axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisSpec {
    pub title: String,
    pub title_font_size: u32,
    pub tick_font_size: u32,
}

/// Histogram over the occurrence counts of a numeric column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramSpec {
    pub title: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub template: String,
    /// Upper bound on bins; `None` lets the renderer decide.
    pub bin_count: Option<usize>,
    /// Occurrence count of every distinct value, most frequent first.
    pub occurrences: Vec<usize>,
}

/// Bar chart of quantity per value for text and datetime columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub template: String,
    pub category_order: String,
    pub categories: Vec<String>,
    pub quantities: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartSpec {
    Histogram(HistogramSpec),
    Bar(BarChartSpec),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Histogram(spec) => &spec.title,
            ChartSpec::Bar(spec) => &spec.title,
        }
    }

    /// Number of plotted points (distinct values).
    pub fn point_count(&self) -> usize {
        match self {
            ChartSpec::Histogram(spec) => spec.occurrences.len(),
            ChartSpec::Bar(spec) => spec.categories.len(),
        }
    }
}
