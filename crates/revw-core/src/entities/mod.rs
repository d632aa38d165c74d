//! Record types for every stage of the review pipeline.
//!
//! Raw input (`RawReview`, `RawBatch`) flows through normalization
//! (`NormalizedReview`) and classification (`ClassifiedReview`), and is
//! summarized into a `BatchSummary`. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON export and schema validation.

mod cell;
mod classified;
mod normalized;
mod output;
mod raw;
mod summary;

pub use cell::CellValue;
pub use classified::ClassifiedReview;
pub use normalized::NormalizedReview;
pub use output::PipelineOutput;
pub use raw::{RawBatch, RawReview};
pub use summary::{BatchSummary, SentimentCounts};
