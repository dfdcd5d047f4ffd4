//! Excel export and read-back for the primary table
//!
//! - Export: primary table → single-sheet `.xlsx`, columns sized to content
//! - Import: `.xlsx` → rows of text, used to inspect what an export wrote

mod exporter;
mod importer;

pub use exporter::{ExcelExporter, ExportReport, HeaderMode, SHEET_NAME};
pub use importer::ExcelImporter;
