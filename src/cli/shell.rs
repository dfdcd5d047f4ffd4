//! Interactive form shell
//!
//! A line-oriented stand-in for the upload form: each command edits one field
//! or triggers one button action, and every action runs to completion before
//! the next line is read.

use crate::cli::commands::{format_model_rows, open_document, ExportSettings, OutputFormat};
use crate::clipboard::{self, ClipboardSink};
use crate::core::{FormFields, StagingGrid};
use crate::error::{HelperError, HelperResult};
use crate::excel::ExcelExporter;
use crate::notice;
use crate::parser::base_name;
use crate::types::{DocTypeOption, HEADERS};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

const HELP: &str = "\
Commands:
  file <path>          select the document (文件名)
  open                 open the selected document
  types                list document types
  type <index>         select a document type (文件类型)
  date <MM/YYYY>       set the document date (文件日期)
  code <text>          append a line of model codes (型号代码)
  codes-clear          clear the model-code text
  separate             expand model codes into the model table
  edit <row> <col> [v] overwrite a model-table cell (1-based)
  add                  stage one row per model code (添加)
  show                 print the form and staged rows
  copy                 copy staged rows to the clipboard (复制)
  export [path]        export staged rows to Excel (导出)
  clean                delete the first staged row (清除行)
  clean-all            reset everything (清除全部)
  help                 show this help
  quit                 leave the shell";

/// Whether the shell keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Quit,
}

/// Form state plus the staging grid behind it
pub struct FormShell<C: ClipboardSink> {
    form: FormFields,
    selected_path: Option<PathBuf>,
    model_text: Vec<String>,
    grid: StagingGrid,
    settings: ExportSettings,
    clipboard: C,
}

impl<C: ClipboardSink> FormShell<C> {
    pub fn new(settings: ExportSettings, clipboard: C) -> Self {
        Self {
            form: FormFields::default(),
            selected_path: None,
            model_text: Vec::new(),
            grid: StagingGrid::new(),
            settings,
            clipboard,
        }
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn grid(&self) -> &StagingGrid {
        &self.grid
    }

    /// The sink `copy` writes to; it lives as long as the shell
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn model_text(&self) -> String {
        self.model_text.join("\n")
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Failed commands are reported and the shell carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> HelperResult<()> {
        writeln!(out, "{}", "📋 Manual Upload Helper".bold().green())?;
        writeln!(out, "   Type 'help' for commands.\n")?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line, out) {
                Ok(ShellFlow::Quit) => break,
                Ok(ShellFlow::Continue) => {}
                Err(HelperError::Validation(e)) => writeln!(out, "{} {}", "⚠️".yellow(), e)?,
                Err(e) => writeln!(out, "{} {}", "❌".red(), e)?,
            }
        }
        Ok(())
    }

    /// Execute a single command line
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> HelperResult<ShellFlow> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!(command, "shell command");

        match command {
            "" => {}
            "file" => self.select_file(rest, out)?,
            "open" => {
                let path = self
                    .selected_path
                    .clone()
                    .ok_or_else(|| HelperError::InvalidFile(PathBuf::new()))?;
                open_document(&path)?;
            }
            "types" => {
                for option in DocTypeOption::all() {
                    writeln!(out, "   {}", option)?;
                }
            }
            "type" => {
                let index = rest
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .parse::<u8>()
                    .map_err(|e| HelperError::Parse(format!("Doc type index '{}': {}", rest, e)))?;
                self.form.doc_type = DocTypeOption::from_index(index)?;
                writeln!(out, "   Doc type: {}", self.form.doc_type)?;
            }
            "date" => {
                self.form.date = rest.to_string();
                writeln!(out, "   Date: {}", self.form.date)?;
            }
            "code" => self.model_text.push(rest.to_string()),
            "codes-clear" => self.model_text.clear(),
            "separate" => {
                let text = self.model_text();
                let rows = self.grid.expand(&text).rows().to_vec();
                let rendered = format_model_rows(&rows, OutputFormat::Table)?;
                if !rendered.is_empty() {
                    writeln!(out, "{}", rendered)?;
                }
                writeln!(out, "   {} model rows", rows.len())?;
            }
            "edit" => self.edit_cell(rest)?,
            "add" => {
                let added = self.grid.add(&self.form)?;
                writeln!(out, "   {} Added {} rows", "✅".green(), added)?;
            }
            "show" => self.show(out)?,
            "copy" => {
                let rows = clipboard::copy_entries(self.grid.entries(), &mut self.clipboard)?;
                writeln!(out, "   {}", notice::copied(rows))?;
            }
            "export" => {
                let output = if rest.is_empty() {
                    self.settings.output.clone()
                } else {
                    PathBuf::from(rest)
                };
                let report = ExcelExporter::new(self.settings.header_mode)
                    .export(self.grid.entries(), &output)?;
                writeln!(out, "   {}", notice::exported(&report.path))?;
            }
            "clean" => {
                if let Some(entry) = self.grid.clean() {
                    writeln!(out, "   Removed {}", entry.model_code)?;
                }
            }
            "clean-all" => {
                let signal = self.grid.clean_all();
                self.form.reset(signal);
                self.selected_path = None;
                self.model_text.clear();
                writeln!(out, "   Cleared")?;
            }
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => return Ok(ShellFlow::Quit),
            other => {
                return Err(HelperError::Parse(format!(
                    "Unknown command '{}'; type 'help'",
                    other
                )))
            }
        }
        Ok(ShellFlow::Continue)
    }

    fn select_file<W: Write>(&mut self, rest: &str, out: &mut W) -> HelperResult<()> {
        let path = PathBuf::from(rest);
        if rest.is_empty() || !path.is_file() {
            return Err(HelperError::InvalidFile(path));
        }
        self.form.file_name = base_name(&path);
        self.selected_path = Some(path);
        writeln!(out, "   File: {}", self.form.file_name)?;
        Ok(())
    }

    fn edit_cell(&mut self, rest: &str) -> HelperResult<()> {
        let mut parts = rest.splitn(3, char::is_whitespace);
        let mut coordinate = |name: &str| -> HelperResult<usize> {
            let raw = parts.next().unwrap_or_default();
            match raw.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(n - 1),
                _ => Err(HelperError::Parse(format!("edit: {} '{}' is not a 1-based number", name, raw))),
            }
        };
        let row = coordinate("row")?;
        let column = coordinate("column")?;
        let value = parts.next().unwrap_or_default().trim().to_string();
        self.grid.model_mut().set_cell(row, column, value)
    }

    fn show<W: Write>(&self, out: &mut W) -> HelperResult<()> {
        writeln!(out, "   File: {}", self.form.file_name)?;
        writeln!(out, "   Doc type: {}", self.form.doc_type)?;
        writeln!(out, "   Date: {}", self.form.date)?;
        writeln!(out, "   Model rows: {}", self.grid.model().len())?;
        writeln!(out, "{}", HEADERS.join("\t").bold())?;
        for entry in self.grid.entries() {
            writeln!(out, "{}", entry.fields().join("\t"))?;
        }
        Ok(())
    }
}
