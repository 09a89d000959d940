//! Text column analyzer.

use dataprof_model::{AxisSpec, BarChartSpec, Column, FrequencyTable, PlotConfig};

use crate::error::{ProfileError, Result};
use crate::frequency::{distinct_count, frequent_values, value_counts};

/// Case and character-class diagnostics over one text column.
///
/// Every count is a number of rows, so repeated values are counted each time
/// they occur. Missing entries are never counted by the class predicates.
#[derive(Debug, Clone)]
pub struct TextColumn {
    column: Column<String>,
}

/// True when `value` has a cased character and every cased one passes `case`.
fn all_cased(value: &str, case: fn(char) -> bool) -> bool {
    let mut cased = value
        .chars()
        .filter(|c| c.is_lowercase() || c.is_uppercase())
        .peekable();
    cased.peek().is_some() && cased.all(case)
}

fn is_lowercase(value: &str) -> bool {
    all_cased(value, char::is_lowercase)
}

fn is_uppercase(value: &str) -> bool {
    all_cased(value, char::is_uppercase)
}

fn is_whitespace(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_whitespace)
}

fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

fn is_digit(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

impl TextColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            column: Column::new(name, values),
        }
    }

    pub fn name(&self) -> &str {
        self.column.name()
    }

    pub fn column(&self) -> &Column<String> {
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

    fn count_where(&self, predicate: impl Fn(&str) -> bool) -> usize {
        self.column.present().filter(|v| predicate(v)).count()
    }

    /// Values that are exactly the empty string.
    pub fn empty_count(&self) -> usize {
        self.count_where(str::is_empty)
    }

    /// Non-empty values made only of whitespace.
    pub fn whitespace_count(&self) -> usize {
        self.count_where(is_whitespace)
    }

    /// Values with at least one cased character, all of them lowercase.
    pub fn lowercase_count(&self) -> usize {
        self.count_where(is_lowercase)
    }

    /// Values with at least one cased character, all of them uppercase.
    pub fn uppercase_count(&self) -> usize {
        self.count_where(is_uppercase)
    }

    pub fn alphabetic_count(&self) -> usize {
        self.count_where(is_alphabetic)
    }

    pub fn digit_count(&self) -> usize {
        self.count_where(is_digit)
    }

    /// Most frequent value, ties going to the smallest one.
    ///
    /// With `drop_missing` false the missing entries compete as one more
    /// candidate and `Ok(None)` means they strictly outnumber every value.
    ///
    /// # Errors
    ///
    /// [`ProfileError::UndefinedResult`] when there is no candidate at all.
    pub fn mode(&self, drop_missing: bool) -> Result<Option<&str>> {
        let missing = if drop_missing {
            0
        } else {
            self.missing_count()
        };
        // `value_counts` ranks by count and breaks ties ascending
        let ranked = value_counts(self.column.values());
        match ranked.first() {
            Some((_, count)) if missing > *count => Ok(None),
            Some((winner, _)) => Ok(self
                .column
                .present()
                .find(|value| *value == winner)
                .map(String::as_str)),
            None if missing > 0 => Ok(None),
            None => Err(ProfileError::undefined("mode", self.name())),
        }
    }

    pub fn frequent_values(&self, n_head: usize) -> FrequencyTable<String> {
        frequent_values(&self.column, n_head)
    }

    /// Bar chart of every distinct value, most frequent first.
    pub fn bar_chart(&self, plot: &PlotConfig) -> BarChartSpec {
        let (categories, quantities) = value_counts(self.column.values()).into_iter().unzip();
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
