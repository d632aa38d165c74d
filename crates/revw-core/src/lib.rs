//! # revw-core
//!
//! Core record types and error taxonomy for Revw.
//!
//! This crate provides the foundational types shared across all Revw crates:
//! - Raw and normalized review records, plus the enriched batch output
//! - The `Sentiment` label enum, per-label counts, and export formats
//! - Source column naming (`ColumnMap`) and fixed column/placeholder constants
//! - The pipeline error taxonomy (`PipelineError`, `ErrorKind`)
//! - CLI response types

pub mod columns;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use columns::ColumnMap;
pub use entities::{
    BatchSummary, CellValue, ClassifiedReview, NormalizedReview, PipelineOutput, RawBatch,
    RawReview, SentimentCounts,
};
pub use enums::{ExportFormat, Sentiment};
pub use errors::{ErrorKind, PipelineError};
