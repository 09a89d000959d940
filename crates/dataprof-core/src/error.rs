//! Error types for the profiling engine.

use dataprof_ingest::IngestError;
use dataprof_model::ColumnKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// A statistic has no value on this column (empty or all missing).
    #[error("{statistic} is undefined for column '{column}': no values to summarize")]
    UndefinedResult {
        statistic: &'static str,
        column: String,
    },

    #[error("column '{column}' not found in dataset")]
    ColumnNotFound { column: String },

    #[error("column '{column}' is {actual}, expected {expected}")]
    KindMismatch {
        column: String,
        expected: ColumnKind,
        actual: ColumnKind,
    },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

impl ProfileError {
    pub(crate) fn undefined(statistic: &'static str, column: &str) -> Self {
        Self::UndefinedResult {
            statistic,
            column: column.to_string(),
        }
    }

    /// True for the degenerate-input case that callers render as a blank.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::UndefinedResult { .. })
    }
}

impl From<polars::prelude::PolarsError> for ProfileError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
