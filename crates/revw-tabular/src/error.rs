//! Tabular I/O error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TabularError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one we know how to read.
    #[error("Unsupported file type '{extension}' for {path} (expected csv, xlsx, xlsm, xls, or ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// The workbook contains no worksheets.
    #[error("Workbook {path} has no worksheets")]
    NoWorksheet { path: PathBuf },

    /// The source has no header row.
    #[error("Missing header row")]
    MissingHeader,

    /// A header names the same column twice.
    #[error("Duplicate column '{column}' in header")]
    DuplicateColumn { column: String },
}

impl TabularError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
