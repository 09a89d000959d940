//! Datetime column analyzer.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use dataprof_model::{AxisSpec, BarChartSpec, Column, FrequencyTable, PlotConfig};

use crate::frequency::{distinct_count, frequent_values, value_counts};

/// Placeholder dates that legacy systems store instead of a real value.
pub const SENTINEL_DATES: [(i32, u32, u32); 2] = [(1900, 1, 1), (1970, 1, 1)];

/// Display layout used for datetime categories and table cells.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn sentinel(index: usize) -> Option<NaiveDate> {
    let (year, month, day) = SENTINEL_DATES[index];
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Calendar diagnostics over one datetime column.
#[derive(Debug, Clone)]
pub struct DatetimeColumn {
    column: Column<NaiveDateTime>,
}

impl DatetimeColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<NaiveDateTime>>) -> Self {
        Self {
            column: Column::new(name, values),
        }
    }

    pub fn name(&self) -> &str {
        self.column.name()
    }

    pub fn column(&self) -> &Column<NaiveDateTime> {
        &self.column
    }

    pub fn row_count(&self) -> usize {
        self.column.len()
    }

    pub fn unique_count(&self) -> usize {
        distinct_count(self.column.values())
    }

    pub fn missing_count(&self) -> usize {
        self.column.missing_count()
    }

    /// Values falling on a Saturday or a Sunday.
    pub fn weekend_count(&self) -> usize {
        self.column
            .present()
            .filter(|v| matches!(v.weekday(), Weekday::Sat | Weekday::Sun))
            .count()
    }

    /// Values falling on Monday through Friday.
    pub fn weekday_count(&self) -> usize {
        self.column.present_count() - self.weekend_count()
    }

    /// Values strictly later than `now`.
    pub fn future_count_at(&self, now: NaiveDateTime) -> usize {
        self.column.present().filter(|v| **v > now).count()
    }

    /// Values strictly later than the local wall-clock time.
    pub fn future_count(&self) -> usize {
        self.future_count_at(Local::now().naive_local())
    }

    /// Values whose calendar date is `date`, whatever their time of day.
    pub fn sentinel_count(&self, date: NaiveDate) -> usize {
        self.column.present().filter(|v| v.date() == date).count()
    }

    pub fn count_1900(&self) -> usize {
        sentinel(0).map_or(0, |date| self.sentinel_count(date))
    }

    pub fn count_1970(&self) -> usize {
        sentinel(1).map_or(0, |date| self.sentinel_count(date))
    }

    pub fn min(&self) -> Option<NaiveDateTime> {
        self.column.present().min().copied()
    }

    pub fn max(&self) -> Option<NaiveDateTime> {
        self.column.present().max().copied()
    }

    pub fn frequent_values(&self, n_head: usize) -> FrequencyTable<NaiveDateTime> {
        frequent_values(&self.column, n_head)
    }

    pub fn bar_chart(&self, plot: &PlotConfig) -> BarChartSpec {
        let (categories, quantities) = value_counts(self.column.values())
            .into_iter()
            .map(|(value, count)| (value.format(DATETIME_DISPLAY_FORMAT).to_string(), count))
            .unzip();
        BarChartSpec {
            title: plot.title.clone(),
            x_axis: AxisSpec {
                title: self.name().to_string(),
                title_font_size: plot.axis_font_size,
                tick_font_size: plot.tick_font_size,
            },
            y_axis: AxisSpec {
                title: plot.y_axis_label.clone(),
                title_font_size: plot.axis_font_size,
                tick_font_size: plot.tick_font_size,
            },
            template: plot.template.clone(),
            category_order: plot.category_order.clone(),
            categories,
            quantities,
        }
    }
}
