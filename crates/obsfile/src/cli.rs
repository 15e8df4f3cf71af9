use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "obsfile")]
#[command(version)]
#[command(about = "Validate and convert history-matching observation files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate an observation file
    Validate {
        file: PathBuf,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,

        /// Report unordered or duplicate dates as warnings instead of errors
        #[arg(long)]
        lenient_dates: bool,
    },

    /// List summary series and RFT surveys with observation counts
    Summary {
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drop invalid observations and write the cleaned document
    Clean {
        file: PathBuf,

        /// Output path (.yml, .yaml or .json)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Convert a document to YAML/JSON or flatten it to JSON Lines
    Export {
        file: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Output format (defaults to the output file extension)
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
    },

    /// Print version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Yaml,
    Json,
    Jsonl,
}
