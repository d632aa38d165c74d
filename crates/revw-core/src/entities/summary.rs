use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Sentiment;

/// Per-label review counts. All three labels are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SentimentCounts {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
}

impl SentimentCounts {
    #[must_use]
    pub const fn get(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    pub const fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    /// Add another tally's counts into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.positive += other.positive;
        self.neutral += other.neutral;
        self.negative += other.negative;
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// `(label, count)` pairs in reporting order, zero counts included.
    pub fn iter(&self) -> impl Iterator<Item = (Sentiment, usize)> + '_ {
        Sentiment::ALL.into_iter().map(|label| (label, self.get(label)))
    }
}

impl FromIterator<Sentiment> for SentimentCounts {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut counts = Self::default();
        for sentiment in iter {
            counts.record(sentiment);
        }
        counts
    }
}

/// Statistics over one classified batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    pub row_count: usize,
    pub sentiment_counts: SentimentCounts,
    pub avg_difficulty: f64,
    pub avg_overall_quality: f64,
    /// Canonical take-again value → number of rows.
    pub take_again_counts: BTreeMap<String, usize>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unseen_labels_are_reported_as_zero() {
        let counts: SentimentCounts = [Sentiment::Negative, Sentiment::Negative]
            .into_iter()
            .collect();
        assert_eq!(
            counts.iter().collect::<Vec<_>>(),
            vec![
                (Sentiment::Positive, 0),
                (Sentiment::Neutral, 0),
                (Sentiment::Negative, 2)
            ]
        );
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn merge_sums_each_label() {
        let mut left: SentimentCounts = [Sentiment::Positive].into_iter().collect();
        let right: SentimentCounts = [Sentiment::Positive, Sentiment::Neutral]
            .into_iter()
            .collect();
        left.merge(&right);
        assert_eq!(
            left,
            SentimentCounts {
                positive: 2,
                neutral: 1,
                negative: 0
            }
        );
    }

    #[test]
    fn counts_serialize_with_label_keys() {
        let counts = SentimentCounts {
            positive: 0,
            neutral: 1,
            negative: 1,
        };
        assert_eq!(
            serde_json::to_value(counts).unwrap(),
            serde_json::json!({ "Positive": 0, "Neutral": 1, "Negative": 1 })
        );
    }
}
