//! Integration tests for both source loading modes.

use std::fs;
use std::path::PathBuf;

use geoquiz_ingest::{IngestError, load_country_names, load_country_table};
use geoquiz_model::{CellValue, ColumnType, SourceOptions};
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write source");
    path
}

#[test]
fn header_and_headerless_modes_read_the_same_file_differently() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "countries.csv", "Name,Population\nFrance,67000000\n");

    let names = load_country_names(&path).expect("headerless");
    assert_eq!(names, vec!["Name", "France"]);

    let table = load_country_table(&path, &SourceOptions::default()).expect("with header");
    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].display_name(), "France");
}

#[test]
fn missing_source_is_not_found_in_both_modes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.csv");
    assert!(matches!(
        load_country_names(&path),
        Err(IngestError::NotFound { .. })
    ));
    assert!(matches!(
        load_country_table(&path, &SourceOptions::default()),
        Err(IngestError::NotFound { .. })
    ));
}

#[test]
fn empty_source_is_empty_dataset_in_both_modes() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "empty.csv", "");
    assert!(matches!(
        load_country_names(&path),
        Err(IngestError::EmptyDataset { .. })
    ));
    assert!(matches!(
        load_country_table(&path, &SourceOptions::default()),
        Err(IngestError::EmptyDataset { .. })
    ));
}

#[test]
fn missing_values_become_nulls() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "gaps.csv",
        "Name,Population,Capital\nFrance,67000000,Paris\nAtlantis,,\n",
    );
    let table = load_country_table(&path, &SourceOptions::default()).unwrap();
    assert_eq!(table.columns[1].column_type, ColumnType::Integer);
    let atlantis = &table.records[1];
    assert_eq!(atlantis.display_name(), "Atlantis");
    assert_eq!(atlantis.cells()[1], CellValue::Null);
    assert_eq!(atlantis.cells()[2], CellValue::Null);
}

#[test]
fn ragged_rows_are_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "ragged.csv", "Name,Population\nFrance,1,2,3\n");
    assert!(matches!(
        load_country_table(&path, &SourceOptions::default()),
        Err(IngestError::Parse { .. })
    ));
}

#[test]
fn empty_display_name_reports_its_row() {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "countries.csv", "Name,Population\nFrance,67000000\n,1000\n");

    let result = load_country_table(&path, &SourceOptions::default());

    assert!(matches!(
        result,
        Err(IngestError::MissingDisplayName { row: 2, .. })
    ));
}
