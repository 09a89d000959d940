//! Typed columns and the column kind tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic kind of a column, resolved once when a dataset is partitioned.
///
/// Every column of a dataset belongs to exactly one kind, and the kind decides
/// which analyzer the column is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// Integer or floating-point values.
    Numeric,
    /// Free text; also the fallback for any dtype that is neither numeric nor temporal.
    Text,
    /// Dates and timestamps.
    Datetime,
}

impl ColumnKind {
    /// All kinds in section order.
    pub const ALL: [ColumnKind; 3] = [ColumnKind::Numeric, ColumnKind::Text, ColumnKind::Datetime];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
            ColumnKind::Datetime => "datetime",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "numeric" | "number" => Ok(ColumnKind::Numeric),
            "text" | "string" => Ok(ColumnKind::Text),
            "datetime" | "date" => Ok(ColumnKind::Datetime),
            other => Err(format!("unknown column kind: {other}")),
        }
    }
}

/// A named, ordered sequence of values where `None` marks a missing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    name: String,
    values: Vec<Option<T>>,
}

impl<T> Column<T> {
    pub fn new(name: impl Into<String>, values: Vec<Option<T>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    /// Number of entries, missing ones included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_none()).count()
    }

    pub fn present_count(&self) -> usize {
        self.len() - self.missing_count()
    }

    /// Iterates over the non-missing values in row order.
    pub fn present(&self) -> impl Iterator<Item = &T> {
        self.values.iter().flatten()
    }

    /// Applies `f` to every non-missing value, keeping missing entries in place.
    pub fn map<U>(self, mut f: impl FnMut(T) -> Option<U>) -> Column<U> {
        Column {
            name: self.name,
            values: self
                .values
                .into_iter()
                .map(|value| value.and_then(&mut f))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in ColumnKind::ALL {
            assert_eq!(kind.as_str().parse::<ColumnKind>(), Ok(kind));
        }
        assert!("binary".parse::<ColumnKind>().is_err());
    }

    #[test]
    fn missing_and_present_counts() {
        let column = Column::new("score", vec![Some(1), None, Some(3), None]);
        assert_eq!(column.len(), 4);
        assert_eq!(column.missing_count(), 2);
        assert_eq!(column.present_count(), 2);
        assert_eq!(column.present().copied().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn map_drops_rejected_values_to_missing() {
        let column = Column::new("raw", vec![Some(-1), Some(2), None]);
        let mapped = column.map(|v| (v > 0).then_some(v * 10));
        assert_eq!(mapped.name(), "raw");
        assert_eq!(mapped.values(), &[None, Some(20), None]);
    }
}
