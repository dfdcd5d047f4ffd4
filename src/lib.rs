//! Manual Upload Helper - model-code expansion and upload staging
//!
//! This library expands compact model-code notation into individual codes,
//! stages one upload row per (model code, document) pair, and exports the
//! staged rows to Excel or the clipboard.
//!
//! # Features
//!
//! - Model-code expansion (`AB12/34X-Y/Z` → four codes)
//! - Staging grid with Add / Clean / Clean All
//! - Excel export with configurable header row
//! - Tab-separated clipboard copy
//! - YAML batch files for non-interactive runs
//!
//! # Example
//!
//! ```no_run
//! use upload_helper::core::{FormFields, StagingGrid};
//! use upload_helper::excel::{ExcelExporter, HeaderMode};
//! use upload_helper::types::DocTypeOption;
//! use std::path::Path;
//!
//! let mut grid = StagingGrid::new();
//! grid.expand("AB12/34X-Y/Z");
//!
//! let form = FormFields::new("OM-1234.pdf", DocTypeOption::from_index(3)?, "05/2024");
//! grid.add(&form)?;
//!
//! let report = ExcelExporter::new(HeaderMode::Always).export(grid.entries(), Path::new("output.xlsx"))?;
//! println!("Exported {} rows to {}", report.rows, report.path.display());
//! # Ok::<(), upload_helper::error::HelperError>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod error;
pub mod excel;
pub mod notice;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{HelperError, HelperResult, ValidationError};
pub use types::{DocTypeOption, ExpandedRow, UploadEntry};
