use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::CellValue;

/// A cleaned review row with its required fields coerced to canonical types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedReview {
    /// First character upper-cased, the rest lower-cased (`"NO"` → `"No"`).
    pub take_again: String,
    /// Never empty; blank input becomes the placeholder comment.
    pub comment: String,
    pub difficulty: i64,
    pub overall_quality: i64,
    /// Non-required source cells, carried through unchanged.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub passthrough: BTreeMap<String, CellValue>,
}
