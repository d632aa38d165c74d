use std::path::PathBuf;

use clap::{Args, Subcommand};
use revw_core::ExportFormat;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Normalize, classify, and summarize a review file.
    Process(ProcessArgs),
    /// Summary statistics, take-again shares, and frequent comment terms.
    Report(ReportArgs),
    /// Automated response for every comment in a review file.
    Feedback(FeedbackArgs),
    /// Classify free text without a file.
    Classify(ClassifyArgs),
    /// Print a JSON Schema, or list the registered schema names.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProcessArgs {
    /// Review file (.csv, .xlsx, .xlsm, .xls, .ods).
    pub input: PathBuf,

    /// Export the processed dataset. Without a value, writes the configured
    /// default file name in the current directory.
    #[arg(short, long)]
    pub output: Option<Option<PathBuf>>,

    /// Export format (defaults to the output file extension, then config).
    #[arg(long, value_parser = parse_export_format)]
    pub export_format: Option<ExportFormat>,

    /// Include the enriched rows in the response.
    #[arg(long)]
    pub rows: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Review file (.csv, .xlsx, .xlsm, .xls, .ods).
    pub input: PathBuf,

    /// Number of frequent terms to list (defaults to config).
    #[arg(long)]
    pub terms: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// Review file (.csv, .xlsx, .xlsm, .xls, .ods).
    pub input: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// One or more texts to classify.
    #[arg(required = true)]
    pub texts: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Schema name (e.g. `classified_review`). Lists names when omitted.
    pub name: Option<String>,
}

fn parse_export_format(value: &str) -> Result<ExportFormat, String> {
    value.parse()
}
