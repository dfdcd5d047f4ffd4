use serde::Serialize;

use crate::error::{HelperError, HelperResult};

//==============================================================================
// Document Types
//==============================================================================

/// Encoded doc-type options, `"<index> <label>"`. Index 0 is the placeholder.
pub const DOC_ITEMS: [&str; 23] = [
    "0 Select your doc type",
    "1 PDI (Pre Delivery Inspection)",
    "2 Service and Maintenance Manual",
    "3 Operators Manual",
    "4 Service Part Kits",
    "5 Parts Book",
    "6 Service Bulletin",
    "7 Drawings and Diagrams",
    "8 Parts Book Mast",
    "9 Parts Book Cabin",
    "10 Parts Book Control system",
    "11 Parts book Driving system",
    "12 Parts book Steering system",
    "13 Parts Book Power system",
    "14 Parts Book Vehicle body system",
    "15 Parts Book Hydraulic system",
    "16 Parts Book Electrical system",
    "17 Parts book Handle",
    "18 Engine Book",
    "19 Transmission Book",
    "20 CAB parts Book",
    "21 Parts book Finger tip",
    "22 LPG SYSTEM",
];

/// A selected document type: index and label parsed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTypeOption {
    pub index: u8,
    pub label: String,
}

impl DocTypeOption {
    /// Parse an encoded `"<index> <label>"` string
    pub fn parse(encoded: &str) -> HelperResult<Self> {
        let encoded = encoded.trim();
        let (index, label) = encoded.split_once(' ').ok_or_else(|| {
            HelperError::Parse(format!("Doc type '{}' is not '<index> <label>'", encoded))
        })?;
        let index = index
            .parse::<u8>()
            .map_err(|e| HelperError::Parse(format!("Doc type index '{}': {}", index, e)))?;
        Ok(Self {
            index,
            label: label.to_string(),
        })
    }

    /// Look up one of the built-in options by index
    pub fn from_index(index: u8) -> HelperResult<Self> {
        let encoded = DOC_ITEMS.get(index as usize).ok_or_else(|| {
            HelperError::Parse(format!(
                "Doc type {} is out of range (0-{})",
                index,
                DOC_ITEMS.len() - 1
            ))
        })?;
        Self::parse(encoded)
    }

    /// The non-selectable "Select your doc type" entry
    pub fn placeholder() -> Self {
        Self {
            index: 0,
            label: "Select your doc type".to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.index == 0
    }

    /// All built-in options in index order
    pub fn all() -> Vec<Self> {
        DOC_ITEMS
            .iter()
            .filter_map(|encoded| Self::parse(encoded).ok())
            .collect()
    }
}

impl Default for DocTypeOption {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl std::fmt::Display for DocTypeOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.index, self.label)
    }
}

//==============================================================================
// Upload Entries
//==============================================================================

/// Column headers of the primary table and of the exported sheet
pub const HEADERS: [&str; 7] = [
    "ID",
    "MODELCODE",
    "DOCTYPE",
    "TITLE",
    "FILENAME",
    "FILETYPE",
    "DATEFORM",
];

pub const FILE_TYPE: &str = "PDF";

/// One finalized record of the primary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadEntry {
    pub id: String,
    pub model_code: String,
    pub doc_type: u8,
    pub title: String,
    pub file_name: String,
    pub file_type: String,
    pub date_form: String,
}

impl UploadEntry {
    pub fn new(model_code: &str, doc_type: &DocTypeOption, file_name: &str, date_form: &str) -> Self {
        Self {
            id: String::new(),
            model_code: model_code.to_string(),
            doc_type: doc_type.index,
            title: doc_type.label.clone(),
            file_name: file_name.to_string(),
            file_type: FILE_TYPE.to_string(),
            date_form: date_form.to_string(),
        }
    }

    /// Field values in `HEADERS` order
    pub fn fields(&self) -> [String; 7] {
        [
            self.id.clone(),
            self.model_code.clone(),
            self.doc_type.to_string(),
            self.title.clone(),
            self.file_name.clone(),
            self.file_type.clone(),
            self.date_form.clone(),
        ]
    }
}

//==============================================================================
// Model Table Rows
//==============================================================================

/// Width of every row in the model table
pub const MODEL_COLUMNS: usize = 20;

/// One row of the model table: always exactly `MODEL_COLUMNS` cells
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ExpandedRow([String; MODEL_COLUMNS]);

impl ExpandedRow {
    /// Build a row from cells, padding with empty strings.
    ///
    /// Returns the row and the number of cells that did not fit.
    pub fn from_cells(cells: Vec<String>) -> (Self, usize) {
        let dropped = cells.len().saturating_sub(MODEL_COLUMNS);
        let mut row = Self::default();
        for (slot, cell) in row.0.iter_mut().zip(cells) {
            *slot = cell;
        }
        (row, dropped)
    }

    /// An unmatched token: the token itself followed by empty cells
    pub fn literal(token: &str) -> Self {
        let mut row = Self::default();
        row.0[0] = token.to_string();
        row
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn cell(&self, column: usize) -> Option<&str> {
        self.0.get(column).map(String::as_str)
    }

    /// Overwrite one cell; returns false when the column is out of range
    pub fn set_cell(&mut self, column: usize, value: impl Into<String>) -> bool {
        match self.0.get_mut(column) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Trimmed, non-empty cell values left to right
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|c| c.trim()).filter(|c| !c.is_empty())
    }
}
