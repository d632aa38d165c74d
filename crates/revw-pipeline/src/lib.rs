//! # revw-pipeline
//!
//! The review processing pipeline for Revw.
//!
//! A batch flows through four stages:
//!
//! 1. [`normalizer`]: canonical take-again values, placeholder comments, and
//!    mean-filled integer ratings
//! 2. classification via [`revw_sentiment::SentimentClassifier`]
//! 3. [`feedback`]: a canned response per sentiment label
//! 4. [`aggregator`]: sentiment counts, rating averages, and take-again counts
//!
//! [`ReviewPipeline`] sequences the stages and optionally fans the per-row
//! work out on a rayon pool. [`terms`] and [`aggregator::take_again_share`]
//! derive report data from a finished run.

pub mod aggregator;
pub mod feedback;
pub mod normalizer;
pub mod pipeline;
pub mod terms;

pub use aggregator::{Tally, aggregate, take_again_share};
pub use feedback::feedback_for;
pub use normalizer::{Normalizer, normalize};
pub use pipeline::{PipelineOptions, ReviewPipeline};
pub use terms::top_terms;
