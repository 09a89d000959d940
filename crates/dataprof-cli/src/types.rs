use dataprof_core::DatasetProfile;
use serde::Serialize;

/// A slice of the dataset rendered as display strings; `None` is a null cell.
#[derive(Debug, Clone, Serialize)]
pub struct RowPreview {
    pub title: &'static str,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Everything the `profile` command prints.
#[derive(Debug, Serialize)]
pub struct ProfileRun {
    pub profile: DatasetProfile,
    pub previews: Vec<RowPreview>,
}
