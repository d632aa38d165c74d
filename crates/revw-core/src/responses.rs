//! CLI response types returned by `revw` commands.
//!
//! These structs define the shape of the output for `revw process`,
//! `revw report`, `revw feedback`, and `revw classify`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{BatchSummary, ClassifiedReview};
use crate::enums::Sentiment;

/// Response from `revw process`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProcessResponse {
    pub input: String,
    pub rows: usize,
    pub summary: BatchSummary,
    /// Where the processed dataset was written, if an export was requested.
    pub output: Option<String>,
    pub processed_at: DateTime<Utc>,
    pub duration_ms: u64,
    /// Enriched rows, present only when requested with `--rows`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ClassifiedReview>>,
}

/// One word and how often it occurs across a batch's comments.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// One take-again answer and its share of the batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ShareEntry {
    pub value: String,
    pub count: usize,
    /// Percentage of rows, rounded to one decimal place.
    pub percent: f64,
}

/// Response from `revw report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReportResponse {
    pub input: String,
    pub summary: BatchSummary,
    pub take_again_share: Vec<ShareEntry>,
    pub top_terms: Vec<TermCount>,
}

/// A single comment paired with its automated response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub row: usize,
    pub comment: String,
    pub sentiment: Sentiment,
    pub automated_response: String,
}

/// Response from `revw classify` for one input text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassifyResponse {
    pub text: String,
    pub polarity: f64,
    pub sentiment: Sentiment,
    pub feedback: String,
}
