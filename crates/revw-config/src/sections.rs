//! Individual configuration sections.

use std::collections::BTreeMap;

use revw_core::ExportFormat;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_parallel_threshold() -> usize {
    10_000
}

const fn default_top_terms() -> usize {
    20
}

fn default_file_name() -> String {
    "processed_professor_reviews.csv".to_string()
}

/// `[sentiment]`: lexicon overrides for the default scorer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SentimentConfig {
    /// Word → polarity, each in `[-1, 1]`. Adds to or replaces built-in entries.
    #[serde(default)]
    pub lexicon: BTreeMap<String, f64>,
}

impl SentimentConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (word, polarity) in &self.lexicon {
            if word.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "sentiment.lexicon",
                    "lexicon words must not be empty",
                ));
            }
            if !polarity.is_finite() || !(-1.0..=1.0).contains(polarity) {
                return Err(ConfigError::invalid(
                    format!("sentiment.lexicon.{word}"),
                    format!("polarity {polarity} is outside [-1, 1]"),
                ));
            }
        }
        Ok(())
    }
}

/// `[pipeline]`: execution options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub parallel: bool,

    /// Smallest batch that runs in parallel when `parallel` is on.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl PipelineConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_threshold == 0 {
            return Err(ConfigError::invalid(
                "pipeline.parallel_threshold",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// `[export]`: defaults for `revw process --output`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            file_name: default_file_name(),
        }
    }
}

impl ExportConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.file_name.trim().is_empty() {
            return Err(ConfigError::invalid("export.file_name", "must not be empty"));
        }
        Ok(())
    }
}

/// `[general]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Number of terms listed by `revw report`.
    #[serde(default = "default_top_terms")]
    pub top_terms: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            top_terms: default_top_terms(),
        }
    }
}
