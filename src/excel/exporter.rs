//! Excel exporter implementation

use crate::error::{HelperError, HelperResult};
use crate::types::{UploadEntry, HEADERS};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::{Path, PathBuf};
use tracing::info;

/// Worksheet every export writes to
pub const SHEET_NAME: &str = "Sheet1";

/// Extra characters added to the widest cell of each column
const COLUMN_MARGIN: usize = 2;

/// When the bold header row is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HeaderMode {
    /// Header on every export; data starts on the second row
    #[default]
    Always,
    /// Header only when the target file is created; exports over an
    /// existing file start data on the first row
    OnCreate,
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Absolute path of the saved workbook
    pub path: PathBuf,
    pub rows: usize,
    pub header_written: bool,
    /// Whether the target did not exist before this export
    pub created: bool,
}

/// Writes the primary table to a single-sheet workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelExporter {
    header_mode: HeaderMode,
}

impl ExcelExporter {
    /// Create a new Excel exporter
    pub fn new(header_mode: HeaderMode) -> Self {
        Self { header_mode }
    }

    pub fn header_mode(&self) -> HeaderMode {
        self.header_mode
    }

    /// Replace the contents of `output_path` with `entries`, one per row.
    ///
    /// Whatever the file held before is discarded.
    pub fn export(&self, entries: &[UploadEntry], output_path: &Path) -> HelperResult<ExportReport> {
        let created = !output_path.exists();
        let header_written = match self.header_mode {
            HeaderMode::Always => true,
            HeaderMode::OnCreate => created,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| HelperError::Export(format!("Failed to set worksheet name: {}", e)))?;

        let mut first_data_row = 0u32;

        if header_written {
            let bold = Format::new().set_bold();
            for (col_idx, header) in HEADERS.iter().enumerate() {
                worksheet
                    .write_string_with_format(0, col_idx as u16, *header, &bold)
                    .map_err(|e| HelperError::Export(format!("Failed to write header: {}", e)))?;
            }
            first_data_row = 1;
        }

        for (row_idx, entry) in entries.iter().enumerate() {
            let row = first_data_row + row_idx as u32;
            Self::write_entry(worksheet, row, entry)?;
        }

        for (col_idx, width) in column_widths(entries, header_written).iter().enumerate() {
            worksheet
                .set_column_width(col_idx as u16, *width as f64)
                .map_err(|e| HelperError::Export(format!("Failed to set column width: {}", e)))?;
        }

        workbook
            .save(output_path)
            .map_err(|e| HelperError::Export(format!("Failed to save Excel file: {}", e)))?;

        let path = std::fs::canonicalize(output_path)?;
        info!(
            path = %path.display(),
            rows = entries.len(),
            header_written,
            created,
            "exported upload entries"
        );

        Ok(ExportReport {
            path,
            rows: entries.len(),
            header_written,
            created,
        })
    }

    /// Write one entry; DOCTYPE as a number, blank text fields left empty
    fn write_entry(worksheet: &mut Worksheet, row: u32, entry: &UploadEntry) -> HelperResult<()> {
        let text_cells = [
            (0u16, &entry.id),
            (1, &entry.model_code),
            (3, &entry.title),
            (4, &entry.file_name),
            (5, &entry.file_type),
            (6, &entry.date_form),
        ];
        for (col, value) in text_cells {
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(row, col, value.as_str())
                .map_err(|e| HelperError::Export(format!("Failed to write text: {}", e)))?;
        }
        worksheet
            .write_number(row, 2, entry.doc_type)
            .map_err(|e| HelperError::Export(format!("Failed to write number: {}", e)))?;
        Ok(())
    }
}

/// Width of each column: its widest written cell plus the margin
pub fn column_widths(entries: &[UploadEntry], header_written: bool) -> [usize; HEADERS.len()] {
    let mut widths = [0usize; HEADERS.len()];
    if header_written {
        for (width, header) in widths.iter_mut().zip(HEADERS) {
            *width = header.chars().count();
        }
    }
    for entry in entries {
        for (width, value) in widths.iter_mut().zip(entry.fields().iter()) {
            *width = (*width).max(value.chars().count());
        }
    }
    widths.map(|width| width + COLUMN_MARGIN)
}
