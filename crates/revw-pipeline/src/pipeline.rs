//! Batch orchestration: normalize, classify, attach feedback, aggregate.

use rayon::prelude::*;
use revw_core::{
    BatchSummary, ClassifiedReview, ColumnMap, NormalizedReview, PipelineError, PipelineOutput,
    RawBatch,
};
use revw_sentiment::{PolarityScorer, SentimentClassifier};

use crate::aggregator::Tally;
use crate::feedback::feedback_for;
use crate::normalizer::Normalizer;

/// Rows per shard when tallying in parallel.
const TALLY_CHUNK: usize = 1024;

/// Execution options for [`ReviewPipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Fan per-row stages out on the rayon pool.
    pub parallel: bool,
    /// Minimum batch size before parallel mode kicks in.
    pub parallel_threshold: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 10_000,
        }
    }
}

/// Runs the full review pipeline over a [`RawBatch`].
///
/// Holds only immutable configuration, so one pipeline can serve any number
/// of runs, including concurrent ones.
#[derive(Debug, Clone)]
pub struct ReviewPipeline<S> {
    classifier: SentimentClassifier<S>,
    columns: ColumnMap,
    options: PipelineOptions,
}

impl<S: PolarityScorer> ReviewPipeline<S> {
    pub fn new(scorer: S) -> Self {
        Self {
            classifier: SentimentClassifier::new(scorer),
            columns: ColumnMap::default(),
            options: PipelineOptions::default(),
        }
    }

    #[must_use]
    pub fn with_columns(mut self, columns: ColumnMap) -> Self {
        self.columns = columns;
        self
    }

    #[must_use]
    pub const fn with_options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    pub const fn classifier(&self) -> &SentimentClassifier<S> {
        &self.classifier
    }

    pub const fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub const fn options(&self) -> PipelineOptions {
        self.options
    }

    /// Classify one normalized review and attach its feedback.
    pub fn enrich(&self, review: NormalizedReview) -> ClassifiedReview {
        let classification = self.classifier.classify(&review.comment);
        ClassifiedReview {
            review,
            polarity: classification.polarity,
            sentiment: classification.sentiment,
            feedback: feedback_for(classification.sentiment).to_string(),
        }
    }

    /// Run every stage over `batch`.
    ///
    /// # Errors
    ///
    /// Returns the first [`PipelineError`] raised by any stage, in row order.
    /// No partial output is produced.
    pub fn run(&self, batch: &RawBatch) -> Result<PipelineOutput, PipelineError> {
        if batch.is_empty() {
            return Err(PipelineError::EmptyBatch);
        }

        let normalizer = Normalizer::prepare(batch, &self.columns)?;
        let parallel = self.use_parallel(batch.len());
        tracing::debug!(rows = batch.len(), parallel, "pipeline: batch validated");

        let (reviews, summary) = if parallel {
            self.run_parallel(batch, &normalizer)?
        } else {
            self.run_sequential(batch, &normalizer)?
        };

        tracing::info!(
            rows = summary.row_count,
            positive = summary.sentiment_counts.positive,
            neutral = summary.sentiment_counts.neutral,
            negative = summary.sentiment_counts.negative,
            "pipeline: batch processed"
        );

        Ok(PipelineOutput {
            columns: batch.columns.clone(),
            reviews,
            summary,
        })
    }

    const fn use_parallel(&self, rows: usize) -> bool {
        self.options.parallel && rows >= self.options.parallel_threshold
    }

    fn run_sequential(
        &self,
        batch: &RawBatch,
        normalizer: &Normalizer<'_>,
    ) -> Result<(Vec<ClassifiedReview>, BatchSummary), PipelineError> {
        let reviews = batch
            .rows
            .iter()
            .enumerate()
            .map(|(row, raw)| normalizer.row(row, raw).map(|review| self.enrich(review)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(rows = reviews.len(), "pipeline: rows classified");

        let summary = reviews.iter().collect::<Tally>().finish()?;
        Ok((reviews, summary))
    }

    fn run_parallel(
        &self,
        batch: &RawBatch,
        normalizer: &Normalizer<'_>,
    ) -> Result<(Vec<ClassifiedReview>, BatchSummary), PipelineError> {
        // Collect per-row results first so the reported error is the first in
        // row order, not whichever worker failed first.
        let results: Vec<Result<ClassifiedReview, PipelineError>> = batch
            .rows
            .par_iter()
            .enumerate()
            .map(|(row, raw)| normalizer.row(row, raw).map(|review| self.enrich(review)))
            .collect();
        let reviews = results.into_iter().collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(rows = reviews.len(), "pipeline: rows classified in parallel");

        let summary = reviews
            .par_chunks(TALLY_CHUNK)
            .map(|chunk| chunk.iter().collect::<Tally>())
            .reduce(Tally::new, Tally::merge)
            .finish()?;
        Ok((reviews, summary))
    }
}
