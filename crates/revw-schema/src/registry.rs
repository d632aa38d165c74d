//! Central schema registry for all Revw record and response types.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of the JSON Schemas for every Revw record shape.
///
/// Built from `revw-core` types via [`schemars::schema_for!`].
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Records ---
        register!(schemas, "cell_value", revw_core::CellValue);
        register!(schemas, "raw_review", revw_core::RawReview);
        register!(schemas, "raw_batch", revw_core::RawBatch);
        register!(schemas, "normalized_review", revw_core::NormalizedReview);
        register!(schemas, "classified_review", revw_core::ClassifiedReview);
        register!(schemas, "sentiment_counts", revw_core::SentimentCounts);
        register!(schemas, "batch_summary", revw_core::BatchSummary);
        register!(schemas, "pipeline_output", revw_core::PipelineOutput);
        register!(schemas, "column_map", revw_core::ColumnMap);

        // --- CLI responses ---
        register!(
            schemas,
            "process_response",
            revw_core::responses::ProcessResponse
        );
        register!(
            schemas,
            "report_response",
            revw_core::responses::ReportResponse
        );
        register!(schemas, "feedback_entry", revw_core::responses::FeedbackEntry);
        register!(
            schemas,
            "classify_response",
            revw_core::responses::ClassifyResponse
        );

        Self { schemas }
    }

    /// Get a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator =
            jsonschema::validator_for(schema).map_err(|e| SchemaError::Compile(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
