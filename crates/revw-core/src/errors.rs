//! Pipeline error taxonomy for Revw.
//!
//! Every stage of the review pipeline fails with a [`PipelineError`]. Adapter
//! crates (tabular I/O, config, schema) define their own errors; a unified
//! error is deferred to `revw-cli` where all crate errors converge.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the normalizer, aggregator, and orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// A required column is absent from the batch header.
    #[error("Schema error: required column '{column}' is missing")]
    MissingColumn { column: String },

    /// A required cell is absent or cannot be coerced to its column's type.
    #[error("Schema error: row {row}, column '{column}': {reason}")]
    MalformedCell {
        row: usize,
        column: String,
        reason: String,
    },

    /// A numeric column has no present values to compute a fill mean from.
    #[error("Insufficient data: column '{column}' has no values to compute a fill mean")]
    InsufficientData { column: String },

    /// The batch contains zero rows.
    #[error("Empty batch: no review rows to process")]
    EmptyBatch,
}

impl PipelineError {
    /// The taxonomy bucket this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingColumn { .. } | Self::MalformedCell { .. } => ErrorKind::Schema,
            Self::InsufficientData { .. } => ErrorKind::InsufficientData,
            Self::EmptyBatch => ErrorKind::EmptyBatch,
        }
    }

    /// Shorthand for [`PipelineError::MalformedCell`].
    #[must_use]
    pub fn malformed(row: usize, column: &str, reason: impl Into<String>) -> Self {
        Self::MalformedCell {
            row,
            column: column.to_string(),
            reason: reason.into(),
        }
    }
}

/// Coarse error classification surfaced to users and scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Schema,
    InsufficientData,
    EmptyBatch,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Schema => "SchemaError",
            Self::InsufficientData => "InsufficientDataError",
            Self::EmptyBatch => "EmptyBatchError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
