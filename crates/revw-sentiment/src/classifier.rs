//! Sign-based sentiment classification over a pluggable scorer.

use revw_core::Sentiment;

use crate::scorer::PolarityScorer;

/// A polarity score and the label derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub polarity: f64,
    pub sentiment: Sentiment,
}

/// Classifies text as positive, neutral, or negative by the sign of its
/// polarity score. Never fails.
#[derive(Debug, Clone)]
pub struct SentimentClassifier<S> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score and label one text.
    ///
    /// Scores outside `[-1, 1]` are clamped; a non-finite score is reported
    /// as `0.0` and labelled neutral.
    pub fn classify(&self, text: &str) -> Classification {
        let raw = self.scorer.score(text);
        let polarity = if raw.is_finite() {
            raw.clamp(-1.0, 1.0)
        } else {
            tracing::warn!(score = raw, "scorer returned a non-finite polarity; using 0");
            0.0
        };

        Classification {
            polarity,
            sentiment: Sentiment::from_polarity(polarity),
        }
    }
}
