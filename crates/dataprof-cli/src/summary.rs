//! Terminal rendering of profiles as comfy-table tables.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dataprof_core::{ColumnReport, ColumnType, DatasetOverview, MetricValue};
use dataprof_model::ColumnKind;

use crate::types::{ProfileRun, RowPreview};

pub fn print_profile(run: &ProfileRun) {
    let profile = &run.profile;
    println!("{}", profile.app_name);
    println!();
    println!("1. Overall Information");
    println!("{}", overview_table(&profile.overview));
    println!("{}", column_types_table(&profile.overview.column_types));
    for preview in &run.previews {
        println!("{}", preview.title);
        println!("{}", preview_table(preview));
    }
    for (index, kind) in ColumnKind::ALL.into_iter().enumerate() {
        let reports = profile.section(kind);
        if reports.is_empty() {
            continue;
        }
        println!();
        println!("{}. {}", index + 2, section_title(kind));
        for (n, report) in reports.iter().enumerate() {
            println!("{}.{} Field Name: {}", index + 2, n + 1, report.name);
            println!("{}", metrics_table(report));
            println!("Most Frequent Values");
            println!("{}", frequency_table(report));
        }
    }
}

pub fn section_title(kind: ColumnKind) -> &'static str {
    match kind {
        ColumnKind::Numeric => "Numeric Column Information",
        ColumnKind::Text => "Text Column Information",
        ColumnKind::Datetime => "Datetime Column Information",
    }
}

pub fn overview_table(overview: &DatasetOverview) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Overview"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Name of Table"), Cell::new(&overview.name)]);
    table.add_row(vec![Cell::new("Number of Rows"), Cell::new(overview.rows)]);
    table.add_row(vec![Cell::new("Number of Columns"), Cell::new(overview.columns)]);
    table.add_row(vec![
        Cell::new("Number of Duplicated Rows"),
        count_cell(overview.duplicate_rows),
    ]);
    table.add_row(vec![
        Cell::new("Number of Rows with Missing Values"),
        count_cell(overview.rows_with_missing),
    ]);
    table
}

pub fn column_types_table(columns: &[ColumnType]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    for column in columns {
        table.add_row(vec![
            Cell::new(&column.name).add_attribute(Attribute::Bold),
            kind_cell(column.kind),
            dim_cell(&column.dtype),
        ]);
    }
    table
}

pub fn preview_table(preview: &RowPreview) -> Table {
    let mut table = Table::new();
    table.set_header(
        preview
            .columns
            .iter()
            .map(|name| header_cell(name))
            .collect::<Vec<_>>(),
    );
    apply_wide_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(
            row.iter()
                .map(|value| preview_cell(value.as_deref()))
                .collect::<Vec<_>>(),
        );
    }
    table
}

pub fn metrics_table(report: &ColumnReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for metric in &report.metrics {
        table.add_row(vec![Cell::new(metric.label), metric_cell(&metric.value)]);
    }
    table
}

pub fn frequency_table(report: &ColumnReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Value"),
        header_cell("Occurrence"),
        header_cell("Percentage"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    if report.frequent_values.is_empty() {
        table.add_row(vec![dim_cell("-"), dim_cell("-"), dim_cell("-")]);
    }
    for row in &report.frequent_values {
        table.add_row(vec![
            value_cell(&row.value),
            Cell::new(row.occurrence),
            Cell::new(format!("{:.4}", row.percentage)),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn kind_cell(kind: ColumnKind) -> Cell {
    let color = match kind {
        ColumnKind::Numeric => Color::Blue,
        ColumnKind::Text => Color::Green,
        ColumnKind::Datetime => Color::Magenta,
    };
    Cell::new(kind).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn metric_cell(value: &MetricValue) -> Cell {
    match value {
        MetricValue::Undefined | MetricValue::Missing => dim_cell(value),
        _ => Cell::new(value),
    }
}

/// Empty strings would render as blank cells; show them quoted instead.
fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("\"\"")
    } else {
        Cell::new(value)
    }
}

fn preview_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), value_cell)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
