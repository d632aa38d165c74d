use revw_config::RevwConfig;
use revw_pipeline::{PipelineOptions, ReviewPipeline};
use revw_sentiment::LexiconScorer;

/// Everything a command needs once configuration is loaded.
pub struct AppContext {
    pub config: RevwConfig,
    pub pipeline: ReviewPipeline<LexiconScorer>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: RevwConfig) -> Self {
        let scorer = LexiconScorer::new().with_overrides(
            config
                .sentiment
                .lexicon
                .iter()
                .map(|(word, polarity)| (word.as_str(), *polarity)),
        );

        let pipeline = ReviewPipeline::new(scorer)
            .with_columns(config.columns.clone())
            .with_options(PipelineOptions {
                parallel: config.pipeline.parallel,
                parallel_threshold: config.pipeline.parallel_threshold,
            });

        if !config.sentiment.lexicon.is_empty() {
            tracing::debug!(
                overrides = config.sentiment.lexicon.len(),
                "context: applied lexicon overrides"
            );
        }

        Self { config, pipeline }
    }
}
