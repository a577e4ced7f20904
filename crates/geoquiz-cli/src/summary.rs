//! Run summaries printed after each command.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use geoquiz_core::{CountryState, MapReport};
use geoquiz_db::{MaterializeReport, TablePreview};
use geoquiz_model::{CellValue, InsertMode};

pub fn print_map_summary(report: &MapReport) {
    println!("{}", map_table(report));
    println!("{}", format_map_summary(report));
    if !report.missing.is_empty() {
        eprintln!("Missing:");
        for name in &report.missing {
            eprintln!("- {name}");
        }
    }
}

pub fn print_database_summary(report: &MaterializeReport) {
    println!("{}", format_database_summary(report));
    println!("{}", schema_table(report));
}

pub fn print_preview(preview: &TablePreview) {
    println!("{}", preview_table_view(preview));
}

/// Plain-text totals of a map run.
pub fn format_map_summary(report: &MapReport) -> String {
    let manifest = match &report.manifest {
        Some(path) => format!("{} ({} missing)", path.display(), report.missing.len()),
        None => "none".to_string(),
    };
    [
        format!("Countries: {}", report.outcomes.len()),
        format!("Rendered: {}", report.rendered_count()),
        format!("Unmatched: {}", report.unmatched_count()),
        format!("Render failed: {}", report.failed_count()),
        format!("Manifest: {manifest}"),
    ]
    .join("\n")
}

/// Plain-text totals of a materialization run.
pub fn format_database_summary(report: &MaterializeReport) -> String {
    let mode = match report.insert_mode {
        InsertMode::Append => "append",
        InsertMode::Replace => "replace",
    };
    [
        format!("Database: {}", report.database.display()),
        format!("Table: {} ({mode})", report.table),
        format!("Rows inserted: {}", report.inserted),
    ]
    .join("\n")
}

/// One row per country with its image path and final state.
pub fn map_table(report: &MapReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Image"),
        header_cell("Status"),
    ]);
    apply_summary_table_style(&mut table);
    for outcome in &report.outcomes {
        table.add_row(vec![
            Cell::new(&outcome.display_name),
            Cell::new(outcome.destination.display()),
            state_cell(&outcome.state),
        ]);
    }
    table
}

pub fn schema_table(report: &MaterializeReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Type")]);
    apply_table_style(&mut table);
    for column in &report.schema.columns {
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.column_type.sql_type()).fg(Color::DarkGrey),
        ]);
    }
    table
}

pub fn preview_table_view(preview: &TablePreview) -> Table {
    let mut table = Table::new();
    table.set_header(preview.columns.iter().map(|c| header_cell(c)));
    apply_table_style(&mut table);
    for row in &preview.rows {
        table.add_row(row.iter().map(value_cell));
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

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn state_cell(state: &CountryState) -> Cell {
    let color = match state {
        CountryState::Rendered => Color::Green,
        CountryState::RenderFailed { .. } => Color::Red,
        CountryState::Unmatched => Color::Yellow,
        CountryState::Pending | CountryState::Matched { .. } => Color::DarkGrey,
    };
    Cell::new(state.to_string()).fg(color)
}

fn value_cell(value: &CellValue) -> Cell {
    match value {
        CellValue::Null => Cell::new("NULL").fg(Color::DarkGrey),
        CellValue::Integer(_) | CellValue::Real(_) => {
            Cell::new(value).set_alignment(CellAlignment::Right)
        }
        CellValue::Text(_) => Cell::new(value),
    }
}
