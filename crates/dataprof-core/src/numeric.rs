//! Numeric column analyzer.

use dataprof_model::{AxisSpec, Column, FrequencyTable, HistogramSpec, PlotConfig};

use crate::frequency::{distinct_count, frequent_values, value_counts};

/// Statistics over one numeric column.
///
/// NaN entries are treated as missing. Aggregates over a column without any
/// present value are `f64::NAN` rather than an error.
#[derive(Debug, Clone)]
pub struct NumericColumn {
    column: Column<f64>,
}

impl NumericColumn {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let column = Column::new(name, values).map(|v| (!v.is_nan()).then_some(v));
        Self { column }
    }

    pub fn name(&self) -> &str {
        self.column.name()
    }

    pub fn column(&self) -> &Column<f64> {
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

    /// Values equal to zero, negative zero included.
    pub fn zero_count(&self) -> usize {
        self.column.present().filter(|v| **v == 0.0).count()
    }

    pub fn negative_count(&self) -> usize {
        self.column.present().filter(|v| **v < 0.0).count()
    }

    pub fn mean(&self) -> f64 {
        let count = self.column.present_count();
        if count == 0 {
            return f64::NAN;
        }
        self.column.present().sum::<f64>() / count as f64
    }

    /// Sample standard deviation (n - 1 denominator).
    pub fn std(&self) -> f64 {
        let count = self.column.present_count();
        if count < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let squares: f64 = self.column.present().map(|v| (v - mean).powi(2)).sum();
        (squares / (count - 1) as f64).sqrt()
    }

    pub fn min(&self) -> f64 {
        self.column
            .present()
            .copied()
            .reduce(f64::min)
            .unwrap_or(f64::NAN)
    }

    pub fn max(&self) -> f64 {
        self.column
            .present()
            .copied()
            .reduce(f64::max)
            .unwrap_or(f64::NAN)
    }

    pub fn median(&self) -> f64 {
        let mut sorted: Vec<f64> = self.column.present().copied().collect();
        if sorted.is_empty() {
            return f64::NAN;
        }
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }

    pub fn frequent_values(&self, n_head: usize) -> FrequencyTable<f64> {
        frequent_values(&self.column, n_head)
    }

    /// Histogram of how often each distinct value occurs.
    pub fn histogram(&self, plot: &PlotConfig) -> HistogramSpec {
        let occurrences = value_counts(self.column.values())
            .into_iter()
            .map(|(_, count)| count)
            .collect();
        HistogramSpec {
            title: plot.title.clone(),
            x_axis: AxisSpec {
                title: format!("{} (binned)", self.name()),
                title_font_size: plot.axis_font_size,
                tick_font_size: plot.tick_font_size,
            },
            y_axis: AxisSpec {
                title: plot.y_axis_label.clone(),
                title_font_size: plot.axis_font_size,
                tick_font_size: plot.tick_font_size,
            },
            template: plot.template.clone(),
            bin_count: plot.max_bins,
            occurrences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NumericColumn {
        NumericColumn::new(
            "amount",
            vec![
                Some(1.1),
                Some(2.2),
                Some(0.0),
                Some(3.3),
                Some(0.0),
                Some(4.4),
                Some(5.5),
                Some(5.5),
                None,
            ],
        )
    }

    #[test]
    fn counts() {
        let column = sample();
        assert_eq!(column.row_count(), 9);
        assert_eq!(column.unique_count(), 6);
        assert_eq!(column.missing_count(), 1);
        assert_eq!(column.zero_count(), 2);
        assert_eq!(column.negative_count(), 0);
    }

    #[test]
    fn aggregates() {
        let column = sample();
        assert!((column.mean() - 2.75).abs() < 1e-9);
        assert!((column.median() - 2.75).abs() < 1e-9);
        assert_eq!(column.min(), 0.0);
        assert_eq!(column.max(), 5.5);
        assert!(column.std() > 0.0);
    }

    #[test]
    fn std_is_sample_deviation() {
        let column = NumericColumn::new("x", vec![Some(2.0), Some(4.0), Some(4.0), Some(6.0)]);
        // squares 4 + 0 + 0 + 4 over n - 1 = 3
        assert!((column.std() - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!(NumericColumn::new("x", vec![Some(1.0)]).std().is_nan());
    }

    #[test]
    fn nan_is_missing() {
        let column = NumericColumn::new("x", vec![Some(f64::NAN), Some(-1.0), None]);
        assert_eq!(column.missing_count(), 2);
        assert_eq!(column.negative_count(), 1);
        assert_eq!(column.unique_count(), 1);
    }

    #[test]
    fn empty_column_is_undefined() {
        let column = NumericColumn::new("x", vec![None, None]);
        assert_eq!(column.unique_count(), 0);
        assert!(column.mean().is_nan());
        assert!(column.std().is_nan());
        assert!(column.min().is_nan());
        assert!(column.max().is_nan());
        assert!(column.median().is_nan());
        assert!(column.frequent_values(20).is_empty());
    }

    #[test]
    fn histogram_carries_plot_styling() {
        let plot = PlotConfig::default()
            .with_title("Histogram of Occurrences")
            .with_y_axis_label("Count")
            .with_max_bins(Some(50));
        let spec = sample().histogram(&plot);
        assert_eq!(spec.title, "Histogram of Occurrences");
        assert_eq!(spec.x_axis.title, "amount (binned)");
        assert_eq!(spec.y_axis.title, "Count");
        assert_eq!(spec.bin_count, Some(50));
        assert_eq!(spec.occurrences, vec![2, 2, 1, 1, 1, 1]);
    }
}
