use anyhow::{Context, Result};
use tracing::{info, info_span};

use dataprof_cli::summary::{column_types_table, print_profile};
use dataprof_cli::types::{ProfileRun, RowPreview};
use dataprof_core::frame::frame_rows;
use dataprof_core::{ColumnType, Dataset, profile_dataset};
use dataprof_model::{ProfileConfig, load_config};

use crate::cli::{OutputFormatArg, ProfileArgs, SchemaArgs};

pub fn run_profile(args: &ProfileArgs) -> Result<()> {
    let span = info_span!("profile", path = %args.csv.display());
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => {
            load_config(path).with_context(|| format!("load config {}", path.display()))?
        }
        None => ProfileConfig::default(),
    };
    let dataset = Dataset::from_csv(&args.csv)
        .with_context(|| format!("load {}", args.csv.display()))?
        .convert_columns_to_datetime(args.to_datetime.as_slice());

    let run = ProfileRun {
        profile: profile_dataset(&dataset, &config).context("profile dataset")?,
        previews: previews(&dataset, args.rows, args.seed)?,
    };
    info!(columns = dataset.column_count(), "Profile complete");

    match args.format {
        OutputFormatArg::Table => print_profile(&run),
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&run).context("serialize profile")?);
        }
    }
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let dataset =
        Dataset::from_csv(&args.csv).with_context(|| format!("load {}", args.csv.display()))?;
    let columns = column_types(&dataset);
    println!("{}", column_types_table(&columns));
    Ok(())
}

fn column_types(dataset: &Dataset) -> Vec<ColumnType> {
    dataset
        .column_dtypes()
        .into_iter()
        .filter_map(|(name, dtype)| {
            let kind = dataset.column_kind(&name)?;
            Some(ColumnType { name, dtype, kind })
        })
        .collect()
}

fn previews(dataset: &Dataset, rows: usize, seed: Option<u64>) -> Result<Vec<RowPreview>> {
    let slices = [
        ("Top Rows of Table", dataset.head(rows)),
        ("Bottom Rows of Table", dataset.tail(rows)),
        (
            "Random Sample Rows of Table",
            dataset.sample(rows, seed).context("sample rows")?,
        ),
    ];
    slices
        .into_iter()
        .map(|(title, slice)| {
            Ok(RowPreview {
                title,
                columns: slice.column_names(),
                rows: frame_rows(slice.frame()).context("render rows")?,
            })
        })
        .collect()
}
