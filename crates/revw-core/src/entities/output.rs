use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BatchSummary, ClassifiedReview};

/// Result of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PipelineOutput {
    /// Source header order, used to lay out the exported file.
    pub columns: Vec<String>,
    /// Enriched rows, in input order.
    pub reviews: Vec<ClassifiedReview>,
    pub summary: BatchSummary,
}

impl PipelineOutput {
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
