//! Excel importer implementation - reads an exported workbook back into rows

use crate::error::{HelperError, HelperResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

/// Reads the first worksheet of an `.xlsx` file as rows of text
pub struct ExcelImporter {
    path: std::path::PathBuf,
}

impl ExcelImporter {
    /// Create a new Excel importer
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Every row of the first sheet, counted from A1.
    ///
    /// Blank cells come back as empty strings; rows are as wide as the
    /// widest used column.
    pub fn read_rows(&self) -> HelperResult<Vec<Vec<String>>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| HelperError::Import(format!("Failed to open Excel file: {}", e)))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| HelperError::Import("Workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| HelperError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

        Ok(Self::range_to_rows(&range))
    }

    /// Convert a range to rows using absolute positions, so leading blank
    /// columns (an empty ID column) keep their place
    fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
        let Some((last_row, last_col)) = range.end() else {
            return Vec::new();
        };

        (0..=last_row)
            .map(|row| {
                (0..=last_col)
                    .map(|col| {
                        range
                            .get_value((row, col))
                            .map(Self::cell_to_string)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.clone(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
            Data::Float(f) => f.to_string(),
            Data::Bool(b) => b.to_string(),
            Data::Empty => String::new(),
            other => other.to_string(),
        }
    }
}
