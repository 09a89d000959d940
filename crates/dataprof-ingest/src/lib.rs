//! CSV ingestion for the column profiler.
//!
//! Loads a single comma-separated file with a header row into a Polars
//! [`DataFrame`](polars::prelude::DataFrame). Schema inference runs over the
//! first rows with date parsing enabled, so ISO dates arrive already typed.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dataprof_ingest::{dataset_name_from_path, read_csv_table};
//!
//! let path = Path::new("data/sales.csv");
//! let df = read_csv_table(path)?;
//! let name = dataset_name_from_path(path);
//! ```

mod csv;
mod error;

use std::path::Path;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, INFER_SCHEMA_ROWS, MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit,
    read_csv_schema, read_csv_table, validate_dataframe_shape, validate_encoding,
};

/// Display name of a dataset loaded from `path`: the file name, or the whole
/// path when it has none.
pub fn dataset_name_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
