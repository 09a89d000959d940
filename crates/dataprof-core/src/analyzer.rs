//! Per-kind routing of dataset columns.

use dataprof_model::{ChartSpec, ColumnKind, FrequencyTable, SectionParams};

use crate::datetime::{DATETIME_DISPLAY_FORMAT, DatetimeColumn};
use crate::frame::format_numeric;
use crate::numeric::NumericColumn;
use crate::text::TextColumn;

/// Queries every analyzer answers regardless of its kind.
pub trait ColumnStats {
    fn name(&self) -> &str;
    fn kind(&self) -> ColumnKind;
    fn row_count(&self) -> usize;
    fn unique_count(&self) -> usize;
    fn missing_count(&self) -> usize;
}

macro_rules! impl_column_stats {
    ($ty:ty, $kind:expr) => {
        impl ColumnStats for $ty {
            fn name(&self) -> &str {
                <$ty>::name(self)
            }

            fn kind(&self) -> ColumnKind {
                $kind
            }

            fn row_count(&self) -> usize {
                <$ty>::row_count(self)
            }

            fn unique_count(&self) -> usize {
                <$ty>::unique_count(self)
            }

            fn missing_count(&self) -> usize {
                <$ty>::missing_count(self)
            }
        }
    };
}

impl_column_stats!(NumericColumn, ColumnKind::Numeric);
impl_column_stats!(TextColumn, ColumnKind::Text);
impl_column_stats!(DatetimeColumn, ColumnKind::Datetime);

/// A column routed to the analyzer of its kind.
#[derive(Debug, Clone)]
pub enum ColumnAnalyzer {
    Numeric(NumericColumn),
    Text(TextColumn),
    Datetime(DatetimeColumn),
}

impl ColumnAnalyzer {
    /// Ranked values rendered as display strings.
    pub fn frequent_values_display(&self, n_head: usize) -> FrequencyTable<String> {
        match self {
            ColumnAnalyzer::Numeric(column) => {
                column.frequent_values(n_head).map_values(format_numeric)
            }
            ColumnAnalyzer::Text(column) => column.frequent_values(n_head),
            ColumnAnalyzer::Datetime(column) => column
                .frequent_values(n_head)
                .map_values(|value| value.format(DATETIME_DISPLAY_FORMAT).to_string()),
        }
    }

    /// Chart parameters for the column, histogram for numbers and bars otherwise.
    pub fn chart(&self, params: &SectionParams) -> ChartSpec {
        match self {
            ColumnAnalyzer::Numeric(column) => ChartSpec::Histogram(column.histogram(&params.plot)),
            ColumnAnalyzer::Text(column) => ChartSpec::Bar(column.bar_chart(&params.plot)),
            ColumnAnalyzer::Datetime(column) => ChartSpec::Bar(column.bar_chart(&params.plot)),
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $column:ident => $body:expr) => {
        match $self {
            ColumnAnalyzer::Numeric($column) => $body,
            ColumnAnalyzer::Text($column) => $body,
            ColumnAnalyzer::Datetime($column) => $body,
        }
    };
}

impl ColumnStats for ColumnAnalyzer {
    fn name(&self) -> &str {
        dispatch!(self, column => column.name())
    }

    fn kind(&self) -> ColumnKind {
        match self {
            ColumnAnalyzer::Numeric(_) => ColumnKind::Numeric,
            ColumnAnalyzer::Text(_) => ColumnKind::Text,
            ColumnAnalyzer::Datetime(_) => ColumnKind::Datetime,
        }
    }

    fn row_count(&self) -> usize {
        dispatch!(self, column => column.row_count())
    }

    fn unique_count(&self) -> usize {
        dispatch!(self, column => column.unique_count())
    }

    fn missing_count(&self) -> usize {
        dispatch!(self, column => column.missing_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_queries_to_the_wrapped_analyzer() {
        let analyzer = ColumnAnalyzer::Numeric(NumericColumn::new(
            "score",
            vec![Some(1.5), Some(1.5), Some(2.0), None],
        ));
        assert_eq!(analyzer.name(), "score");
        assert_eq!(analyzer.kind(), ColumnKind::Numeric);
        assert_eq!(analyzer.row_count(), 4);
        assert_eq!(analyzer.unique_count(), 2);
        assert_eq!(analyzer.missing_count(), 1);

        let display = analyzer.frequent_values_display(20);
        assert_eq!(display.values().collect::<Vec<_>>(), vec!["1.5", "2"]);
        assert!(matches!(
            analyzer.chart(&SectionParams::default()),
            ChartSpec::Histogram(_)
        ));
    }

    #[test]
    fn text_and_datetime_use_bar_charts() {
        let text = ColumnAnalyzer::Text(TextColumn::new("t", vec![Some("a".to_string())]));
        assert_eq!(text.kind(), ColumnKind::Text);
        assert!(matches!(text.chart(&SectionParams::default()), ChartSpec::Bar(_)));

        let dates = ColumnAnalyzer::Datetime(DatetimeColumn::new("d", vec![None]));
        assert_eq!(dates.kind(), ColumnKind::Datetime);
        assert_eq!(dates.chart(&SectionParams::default()).point_count(), 0);
    }
}
