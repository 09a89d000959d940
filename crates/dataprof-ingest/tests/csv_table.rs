//! Integration tests for CSV ingestion and dtype inference.

use std::fs;
use std::path::PathBuf;

use dataprof_ingest::{IngestError, dataset_name_from_path, read_csv_table};
use polars::prelude::DataType;

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn infers_numeric_text_and_date_columns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "orders.csv",
        "id,amount,customer,ordered_on\n1,10.5,ana,2024-01-15\n2,,bo,2024-02-01\n3,7.25,,\n",
    );
    let df = read_csv_table(&path).expect("read csv");

    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 4);
    assert!(df.column("id").unwrap().dtype().is_integer());
    assert_eq!(df.column("amount").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("customer").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("ordered_on").unwrap().dtype(), &DataType::Date);

    assert_eq!(df.column("amount").unwrap().null_count(), 1);
    assert_eq!(df.column("customer").unwrap().null_count(), 1);
    assert_eq!(dataset_name_from_path(&path), "orders.csv");
}

#[test]
fn header_only_file_loads_as_empty_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "empty.csv", "a,b\n");
    let df = read_csv_table(&path).expect("read csv");

    assert_eq!(df.height(), 0);
    assert_eq!(df.width(), 2);
}

#[test]
fn empty_file_is_malformed_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "nothing.csv", "");
    let err = read_csv_table(&path).unwrap_err();

    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn duplicate_headers_are_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "dup.csv", "a,b,a\n1,2,3\n");
    let err = read_csv_table(&path).unwrap_err();

    assert!(err.to_string().contains("duplicate column name 'a'"));
}
