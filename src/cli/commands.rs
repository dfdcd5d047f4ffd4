use crate::clipboard::{self, SystemClipboard};
use crate::core::{expand_text, FormFields, StagingGrid};
use crate::error::{HelperError, HelperResult};
use crate::excel::{ExcelExporter, ExcelImporter, HeaderMode};
use crate::notice;
use crate::parser;
use crate::types::{DocTypeOption, ExpandedRow};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};

/// How the `expand` command prints the model table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Numbered rows showing the non-empty cells
    #[default]
    Table,
    /// All 20 cells per row, tab separated
    Tsv,
    /// JSON array of 20-cell arrays
    Json,
}

/// Where and how exports are written
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub output: PathBuf,
    pub header_mode: HeaderMode,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.xlsx"),
            header_mode: HeaderMode::default(),
        }
    }
}

/// Render model rows in the requested format
pub fn format_model_rows(rows: &[ExpandedRow], format: OutputFormat) -> HelperResult<String> {
    let rendered = match format {
        OutputFormat::Table => rows
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let codes: Vec<&str> = row.codes().collect();
                format!("{:>4} │ {}", idx + 1, codes.join("  "))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Tsv => rows
            .iter()
            .map(|row| row.cells().join("\t"))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
    };
    Ok(rendered)
}

/// Execute the expand command
pub fn expand(text: Option<String>, input: Option<PathBuf>, format: OutputFormat) -> HelperResult<()> {
    let raw = match (text, input) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let rows = expand_text(&raw);
    let rendered = format_model_rows(&rows, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

/// Execute the doc-types command
pub fn doc_types() -> HelperResult<()> {
    println!("{}", "📚 Document types".bold().green());
    for option in DocTypeOption::all() {
        if option.is_placeholder() {
            println!("   {}", option.to_string().dimmed());
        } else {
            println!("   {}", option);
        }
    }
    Ok(())
}

/// Execute the run command: stage every submission of a batch file, then export
pub fn run(
    batch: PathBuf,
    settings: ExportSettings,
    copy: bool,
    tsv: bool,
    verbose: bool,
) -> HelperResult<()> {
    println!("{}", "📋 Manual Upload Helper - Batch".bold().green());
    println!("   Batch:  {}", batch.display());
    println!("   Output: {}\n", settings.output.display());

    let parsed = parser::parse_batch_file(&batch)?;
    if verbose {
        println!("   Found {} submissions\n", parsed.submissions.len());
    }

    let mut grid = StagingGrid::new();
    for (idx, submission) in parsed.submissions.iter().enumerate() {
        grid.expand(&submission.model_codes);
        let form = FormFields::new(
            submission.file_name(),
            submission.doc_type_option()?,
            submission.date.clone(),
        );

        match grid.add(&form) {
            Ok(added) => {
                if verbose {
                    println!(
                        "   {} #{} {} → {} rows",
                        "✅".green(),
                        idx + 1,
                        form.file_name.cyan(),
                        added
                    );
                }
            }
            Err(e) => {
                println!("   {} Submission #{}: {}", "❌".red(), idx + 1, e);
                return Err(e.into());
            }
        }
    }

    let exporter = ExcelExporter::new(settings.header_mode);
    let report = exporter.export(grid.entries(), &settings.output)?;
    println!("{}", "✅ Export Complete!".bold().green());
    println!("   {}", notice::exported(&report.path));
    println!("   Rows: {}\n", report.rows);

    if copy {
        // the process exits right after, so hold the selection until it is taken over
        let mut sink = SystemClipboard::new().wait_for_takeover();
        println!("   Copying {} rows, waiting for a paste...", grid.entries().len());
        let rows = clipboard::copy_entries(grid.entries(), &mut sink)?;
        println!("   {}", notice::copied(rows));
    }

    if tsv {
        println!("{}", clipboard::to_tsv(grid.entries()));
    }

    Ok(())
}

/// Execute the inspect command
pub fn inspect(file: PathBuf) -> HelperResult<()> {
    println!("{}", "🔍 Manual Upload Helper - Inspect".bold().green());
    println!("   File: {}\n", file.display());

    let rows = ExcelImporter::new(&file).read_rows()?;
    for row in &rows {
        println!("{}", row.join("\t"));
    }
    println!("\n   {} rows", rows.len());
    Ok(())
}

/// Open a document with the platform's default application
///
/// # Coverage Exclusion
/// Launches an external program - cannot unit test
#[cfg(not(coverage))]
pub fn open_document(path: &Path) -> HelperResult<()> {
    use std::process::Command;

    if !path.is_file() {
        return Err(HelperError::InvalidFile(path.to_path_buf()));
    }

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    };
    #[cfg(target_os = "macos")]
    let mut command = Command::new("open");
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let mut command = Command::new("xdg-open");

    command.arg(path).spawn()?;
    Ok(())
}

#[cfg(coverage)]
pub fn open_document(path: &Path) -> HelperResult<()> {
    if !path.is_file() {
        return Err(HelperError::InvalidFile(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
