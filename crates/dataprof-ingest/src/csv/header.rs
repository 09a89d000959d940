//! CSV header parsing and validation.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Column names from the header row, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Rejects blank and repeated names; a profile is keyed by column name.
    pub(crate) fn validate(&self, path: &Path) -> Result<()> {
        if self.columns.iter().all(|c| c.trim().is_empty()) {
            return Err(IngestError::NoHeaderDetected {
                path: path.to_path_buf(),
            });
        }
        let mut seen = BTreeSet::new();
        for (index, column) in self.columns.iter().enumerate() {
            if column.trim().is_empty() {
                return Err(IngestError::EmptyColumnName {
                    path: path.to_path_buf(),
                    index,
                });
            }
            if !seen.insert(column.as_str()) {
                return Err(IngestError::DuplicateColumnName {
                    path: path.to_path_buf(),
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Reads the header record of a CSV file.
///
/// Returns `Ok(None)` when the file holds no record at all.
pub(crate) fn read_header_record(path: &Path) -> Result<Option<CsvHeaders>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    let mut record = ::csv::StringRecord::new();
    let found = reader
        .read_record(&mut record)
        .map_err(|e| csv_error(path, e))?;
    if !found {
        return Ok(None);
    }
    let columns = record
        .iter()
        .map(|value| value.trim_start_matches('\u{feff}').to_string())
        .collect();
    Ok(Some(CsvHeaders::new(columns)))
}

fn csv_error(path: &Path, err: ::csv::Error) -> IngestError {
    match err.into_kind() {
        ::csv::ErrorKind::Io(source) => IngestError::open(path, source),
        other => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!("{other:?}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> CsvHeaders {
        CsvHeaders::new(names.iter().map(|n| (*n).to_string()).collect())
    }

    #[test]
    fn test_csv_headers_lookup() {
        let headers = headers(&["A", "B"]);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.position("B"), Some(1));
        assert_eq!(headers.position("C"), None);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let err = headers(&["A", "B", "A"])
            .validate(Path::new("dup.csv"))
            .unwrap_err();
        assert!(matches!(err, IngestError::DuplicateColumnName { column, .. } if column == "A"));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let err = headers(&["A", " ", "C"])
            .validate(Path::new("blank.csv"))
            .unwrap_err();
        assert!(matches!(err, IngestError::EmptyColumnName { index: 1, .. }));
    }

    #[test]
    fn test_validate_rejects_blank_header_row() {
        let err = headers(&["", ""]).validate(Path::new("x.csv")).unwrap_err();
        assert!(matches!(err, IngestError::NoHeaderDetected { .. }));
    }
}
