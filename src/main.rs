use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use upload_helper::cli::{self, ExportSettings, FormShell, OutputFormat};
use upload_helper::clipboard::SystemClipboard;
use upload_helper::excel::HeaderMode;

#[derive(Parser)]
#[command(name = "upload-helper")]
#[command(about = "Manual Upload Helper: expand model codes, stage upload rows, export to Excel.")]
#[command(long_about = "Manual Upload Helper - document upload staging

Expands compact model-code notation into individual codes, stages one row
per (model code, document) pair, and exports the rows to Excel (.xlsx) or
the clipboard as tab-separated text.

MODEL CODES:
  AB12/34X-Y/Z  →  AB12X-Y  AB12X-Z  AB34X-Y  AB34X-Z
  Tokens that do not match are kept as-is.

COMMANDS:
  expand     - Expand model codes and print the model table
  doc-types  - List document types
  run        - Stage a YAML batch of submissions and export
  inspect    - Print the rows of an exported workbook
  shell      - Interactive form

EXAMPLES:
  upload-helper expand 'AB12/34X-Y/Z CD5-K'
  upload-helper run batch.yaml --output upload.xlsx --copy
  upload-helper shell --header on-create")]
#[command(version)]
struct Cli {
    /// Show debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand model codes and print the model table
    Expand {
        /// Model-code text (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read model-code text from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List document types
    DocTypes,

    #[command(long_about = "Stage a YAML batch of submissions and export them.

Each submission is expanded and added exactly like the Add button of the
form; the first submission that fails validation aborts the run.

BATCH FILE:
  submissions:
    - file: docs/OM-1234.pdf
      doc_type: 3
      date: \"05/2024\"
      model_codes: |
        AB12/34X-Y/Z CD5-K

HEADER MODES:
  always     - bold header on every export (default)
  on-create  - header only when the output file is created")]
    /// Stage a YAML batch of submissions and export
    Run {
        /// Path to the YAML batch file
        batch: PathBuf,

        /// Output Excel file path (.xlsx)
        #[arg(short, long, env = "UPLOAD_HELPER_OUTPUT", default_value = "output.xlsx")]
        output: PathBuf,

        /// When to write the header row
        #[arg(long, value_enum, env = "UPLOAD_HELPER_HEADER", default_value_t = HeaderMode::Always)]
        header: HeaderMode,

        /// Also copy the staged rows to the clipboard
        #[arg(long)]
        copy: bool,

        /// Also print the staged rows as tab-separated text
        #[arg(long)]
        tsv: bool,
    },

    /// Print the rows of an exported workbook
    Inspect {
        /// Path to Excel file (.xlsx)
        file: PathBuf,
    },

    /// Interactive form
    Shell {
        /// Default export path
        #[arg(short, long, env = "UPLOAD_HELPER_OUTPUT", default_value = "output.xlsx")]
        output: PathBuf,

        /// When to write the header row
        #[arg(long, value_enum, env = "UPLOAD_HELPER_HEADER", default_value_t = HeaderMode::Always)]
        header: HeaderMode,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "upload_helper=debug"
    } else {
        "upload_helper=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Expand {
            text,
            input,
            format,
        } => cli::expand(text, input, format)?,

        Commands::DocTypes => cli::doc_types()?,

        Commands::Run {
            batch,
            output,
            header,
            copy,
            tsv,
        } => {
            let settings = ExportSettings {
                output,
                header_mode: header,
            };
            cli::run(batch, settings, copy, tsv, cli.verbose)?
        }

        Commands::Inspect { file } => cli::inspect(file)?,

        Commands::Shell { output, header } => {
            let settings = ExportSettings {
                output,
                header_mode: header,
            };
            let mut shell = FormShell::new(settings, SystemClipboard::new());
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            shell.run(stdin.lock(), &mut stdout)?
        }
    }

    Ok(())
}
