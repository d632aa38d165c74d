use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::NormalizedReview;
use crate::enums::Sentiment;

/// A normalized review enriched with its sentiment and automated response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassifiedReview {
    #[serde(flatten)]
    pub review: NormalizedReview,
    /// Raw polarity score in `[-1, 1]` the label was derived from.
    pub polarity: f64,
    pub sentiment: Sentiment,
    pub feedback: String,
}
