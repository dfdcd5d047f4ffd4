//! CLI command handlers

pub mod commands;
pub mod shell;

pub use commands::{doc_types, expand, inspect, open_document, run, ExportSettings, OutputFormat};
pub use shell::{FormShell, ShellFlow};
