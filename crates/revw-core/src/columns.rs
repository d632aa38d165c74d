//! Source column names and fixed output columns.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default header of the "would take again" column.
pub const TAKE_AGAIN: &str = "take again";
/// Default header of the free-text comment column.
pub const COMMENTS: &str = "comments";
/// Default header of the difficulty rating column.
pub const DIFFICULTY: &str = "difficulty";
/// Default header of the overall quality rating column.
pub const OVERALL_QUALITY: &str = "overall quality";

/// Derived column holding the sentiment label.
pub const SENTIMENT: &str = "sentiment";
/// Derived column holding the templated response.
pub const AUTOMATED_FEEDBACK: &str = "automated_feedback";

/// Columns the pipeline computes. They are never treated as passthrough input.
pub const DERIVED: [&str; 2] = [SENTIMENT, AUTOMATED_FEEDBACK];

/// Substitute text for a missing or blank comment.
pub const PLACEHOLDER_COMMENT: &str = "No comment";

/// Names of the four required source columns.
///
/// Defaults match the headers of the standard review export; any of them can
/// be remapped from configuration for differently labelled files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnMap {
    #[serde(default = "ColumnMap::default_take_again")]
    pub take_again: String,
    #[serde(default = "ColumnMap::default_comments")]
    pub comments: String,
    #[serde(default = "ColumnMap::default_difficulty")]
    pub difficulty: String,
    #[serde(default = "ColumnMap::default_overall_quality")]
    pub overall_quality: String,
}

impl ColumnMap {
    fn default_take_again() -> String {
        TAKE_AGAIN.to_string()
    }

    fn default_comments() -> String {
        COMMENTS.to_string()
    }

    fn default_difficulty() -> String {
        DIFFICULTY.to_string()
    }

    fn default_overall_quality() -> String {
        OVERALL_QUALITY.to_string()
    }

    /// The required column names, in canonical order.
    #[must_use]
    pub fn required(&self) -> [&str; 4] {
        [
            self.take_again.as_str(),
            self.comments.as_str(),
            self.difficulty.as_str(),
            self.overall_quality.as_str(),
        ]
    }

    /// Whether `name` is one of the required columns.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.required().contains(&name)
    }

    /// Whether `name` is a required or derived column (i.e. not passthrough).
    #[must_use]
    pub fn is_managed(&self, name: &str) -> bool {
        self.is_required(name) || DERIVED.contains(&name)
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            take_again: Self::default_take_again(),
            comments: Self::default_comments(),
            difficulty: Self::default_difficulty(),
            overall_quality: Self::default_overall_quality(),
        }
    }
}
