use std::path::PathBuf;

use thiserror::Error;

use crate::notice;

pub type HelperResult<T> = Result<T, HelperError>;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("{}: {}", notice::INVALID_FILE, .0.display())]
    InvalidFile(PathBuf),

    #[error("Cell ({row}, {column}) is outside the model table ({rows} rows x {columns} columns)")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

/// A precondition of the Add operation that was not met.
///
/// Checked in declaration order; the first failure is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", notice::MISSING_FILE_NAME)]
    MissingFileName,

    #[error("{}", notice::MISSING_DOC_TYPE)]
    MissingDocType,

    #[error("{}", notice::MISSING_DATE)]
    MissingDate,

    #[error("{}", notice::EMPTY_MODEL_TABLE)]
    EmptyModelTable,
}
