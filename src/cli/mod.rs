pub mod configure;
pub mod extract;
pub mod show;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::parser::{parse_slik_report, ParseReport};
use crate::pdf::load_document_text;

/// Load one report and run the extractor over it.
pub(crate) fn parse_file(file: &str) -> Result<ParseReport> {
    let path = PathBuf::from(file);
    let text = load_document_text(&path)?;
    let report = parse_slik_report(&text);
    tracing::info!(
        file,
        debtor = %report.debtor_name,
        blocks = report.blocks,
        rejected = report.rejected,
        facilities = report.records.len(),
        "parsed report"
    );
    Ok(report)
}

#[derive(Parser)]
#[command(name = "slik", about = "Extract credit facilities from SLIK credit-bureau reports.")]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract facilities from one or more reports into a spreadsheet.
    Extract {
        /// SLIK report PDFs (or pre-extracted .txt files)
        #[arg(required = true)]
        files: Vec<String>,
        /// Output file (default: <output_dir>/hasil_slik-YYYYMMDD-HHMMSS.<ext>)
        #[arg(long, short)]
        output: Option<String>,
        /// Output format: xlsx, csv, json (default: from --output extension, then settings)
        #[arg(long)]
        format: Option<String>,
    },
    /// Print the facilities in a report.
    Show {
        /// SLIK report PDF (or pre-extracted .txt file)
        file: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the settings file and current settings.
    Status,
    /// Change settings.
    Configure {
        /// Directory for exports when --output is not given
        #[arg(long = "output-dir")]
        output_dir: Option<String>,
        /// Default export format: xlsx, csv, json
        #[arg(long)]
        format: Option<String>,
        /// Worksheet name for xlsx exports
        #[arg(long = "sheet-name")]
        sheet_name: Option<String>,
    },
}
