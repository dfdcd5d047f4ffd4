//! Excel export / read-back tests

use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;
use upload_helper::core::{FormFields, StagingGrid};
use upload_helper::excel::{ExcelExporter, ExcelImporter, HeaderMode};
use upload_helper::types::{DocTypeOption, UploadEntry, HEADERS};

fn staged_entries() -> Vec<UploadEntry> {
    let mut grid = StagingGrid::new();
    grid.expand("FB10/15-A");
    let form = FormFields::new("OM-FB10.pdf", DocTypeOption::from_index(3).unwrap(), "05/2024");
    grid.add(&form).unwrap();
    grid.entries().to_vec()
}

fn header_row() -> Vec<String> {
    HEADERS.iter().map(|h| h.to_string()).collect()
}

fn entry_rows(entries: &[UploadEntry]) -> Vec<Vec<String>> {
    entries.iter().map(|e| e.fields().to_vec()).collect()
}

fn read_back(path: &Path) -> Vec<Vec<String>> {
    ExcelImporter::new(path).read_rows().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER MODE: ALWAYS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_always_fresh_target_has_header_then_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.xlsx");
    let entries = staged_entries();

    let report = ExcelExporter::new(HeaderMode::Always)
        .export(&entries, &output_path)
        .unwrap();
    assert_eq!(report.rows, 2);
    assert!(report.header_written);

    let mut expected = vec![header_row()];
    expected.extend(entry_rows(&entries));
    assert_eq!(read_back(&output_path), expected);
}

#[test]
fn test_always_second_export_keeps_header() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.xlsx");
    let exporter = ExcelExporter::new(HeaderMode::Always);
    let entries = staged_entries();

    exporter.export(&entries, &output_path).unwrap();
    let report = exporter.export(&entries[..1], &output_path).unwrap();
    assert!(!report.created);
    assert!(report.header_written);

    let rows = read_back(&output_path);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], header_row());
    assert_eq!(rows[1], entries[0].fields().to_vec());
}

// ═══════════════════════════════════════════════════════════════════════════
// HEADER MODE: ON CREATE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_on_create_fresh_target_has_header() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.xlsx");
    let entries = staged_entries();

    let report = ExcelExporter::new(HeaderMode::OnCreate)
        .export(&entries, &output_path)
        .unwrap();
    assert!(report.created);
    assert!(report.header_written);

    let rows = read_back(&output_path);
    assert_eq!(rows[0], header_row());
    assert_eq!(rows[1..].to_vec(), entry_rows(&entries));
}

#[test]
fn test_on_create_existing_target_overwrites_header() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.xlsx");
    let exporter = ExcelExporter::new(HeaderMode::OnCreate);
    let entries = staged_entries();

    exporter.export(&entries, &output_path).unwrap();
    let report = exporter.export(&entries, &output_path).unwrap();
    assert!(!report.header_written);

    // no header row and exactly one row per entry
    assert_eq!(read_back(&output_path), entry_rows(&entries));
}

#[test]
fn test_on_create_existing_target_drops_stale_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.xlsx");
    let exporter = ExcelExporter::new(HeaderMode::OnCreate);
    let entries = staged_entries();

    exporter.export(&entries, &output_path).unwrap();
    exporter.export(&entries[1..], &output_path).unwrap();

    assert_eq!(read_back(&output_path), entry_rows(&entries[1..]));
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTENT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_export_empty_table() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("empty.xlsx");

    let report = ExcelExporter::default().export(&[], &output_path).unwrap();
    assert_eq!(report.rows, 0);
    assert_eq!(read_back(&output_path), vec![header_row()]);
}

#[test]
fn test_export_preserves_primary_order() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("order.xlsx");

    let mut grid = StagingGrid::new();
    let form = FormFields::new("a.pdf", DocTypeOption::from_index(22).unwrap(), "01/2021");
    grid.expand("K1/2/3-X");
    grid.add(&form).unwrap();

    ExcelExporter::new(HeaderMode::OnCreate)
        .export(grid.entries(), &output_path)
        .unwrap();

    let model_codes: Vec<String> = read_back(&output_path)[1..]
        .iter()
        .map(|row| row[1].clone())
        .collect();
    assert_eq!(model_codes, vec!["K3-X", "K2-X", "K1-X"]);
}

#[test]
fn test_import_not_a_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let bogus = temp_dir.path().join("bogus.xlsx");
    std::fs::write(&bogus, "not a zip").unwrap();
    assert!(ExcelImporter::new(&bogus).read_rows().is_err());
}
