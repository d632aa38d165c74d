//! Batch statistics over classified reviews.
//!
//! Aggregation is built on [`Tally`], a commutative accumulator of counts and
//! sums. Tallies of disjoint shards merge by addition, and means are only
//! computed in [`Tally::finish`].

use std::collections::BTreeMap;

use revw_core::responses::ShareEntry;
use revw_core::{BatchSummary, ClassifiedReview, PipelineError, SentimentCounts};

/// Running counts and sums over a set of classified reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    rows: usize,
    sentiments: SentimentCounts,
    difficulty_sum: i128,
    overall_quality_sum: i128,
    take_again: BTreeMap<String, usize>,
}

impl Tally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one review to the tally.
    pub fn observe(&mut self, review: &ClassifiedReview) {
        self.rows += 1;
        self.sentiments.record(review.sentiment);
        self.difficulty_sum += i128::from(review.review.difficulty);
        self.overall_quality_sum += i128::from(review.review.overall_quality);
        *self
            .take_again
            .entry(review.review.take_again.clone())
            .or_insert(0) += 1;
    }

    /// Combine two shard tallies.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.rows += other.rows;
        self.sentiments.merge(&other.sentiments);
        self.difficulty_sum += other.difficulty_sum;
        self.overall_quality_sum += other.overall_quality_sum;
        for (value, count) in other.take_again {
            *self.take_again.entry(value).or_insert(0) += count;
        }
        self
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Turn the tally into a summary.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyBatch`] if nothing was observed.
    #[allow(clippy::cast_precision_loss)]
    pub fn finish(self) -> Result<BatchSummary, PipelineError> {
        if self.rows == 0 {
            return Err(PipelineError::EmptyBatch);
        }

        let rows = self.rows as f64;
        Ok(BatchSummary {
            row_count: self.rows,
            sentiment_counts: self.sentiments,
            avg_difficulty: self.difficulty_sum as f64 / rows,
            avg_overall_quality: self.overall_quality_sum as f64 / rows,
            take_again_counts: self.take_again,
        })
    }
}

impl<'a> FromIterator<&'a ClassifiedReview> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a ClassifiedReview>>(iter: I) -> Self {
        let mut tally = Self::new();
        for review in iter {
            tally.observe(review);
        }
        tally
    }
}

/// Summarize a classified batch.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyBatch`] for an empty slice.
pub fn aggregate(reviews: &[ClassifiedReview]) -> Result<BatchSummary, PipelineError> {
    reviews.iter().collect::<Tally>().finish()
}

/// Each take-again answer with its share of the batch, largest first.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn take_again_share(summary: &BatchSummary) -> Vec<ShareEntry> {
    let mut entries: Vec<ShareEntry> = summary
        .take_again_counts
        .iter()
        .map(|(value, count)| {
            let percent = if summary.row_count == 0 {
                0.0
            } else {
                (*count as f64 * 1000.0 / summary.row_count as f64).round() / 10.0
            };
            ShareEntry {
                value: value.clone(),
                count: *count,
                percent,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    entries
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use revw_core::{NormalizedReview, Sentiment};

    use super::*;
    use crate::feedback::feedback_for;

    fn classified(take_again: &str, difficulty: i64, quality: i64, sentiment: Sentiment) -> ClassifiedReview {
        ClassifiedReview {
            review: NormalizedReview {
                take_again: take_again.into(),
                comment: "text".into(),
                difficulty,
                overall_quality: quality,
                passthrough: BTreeMap::new(),
            },
            polarity: 0.0,
            sentiment,
            feedback: feedback_for(sentiment).into(),
        }
    }

    #[test]
    fn summary_counts_every_label_and_averages_ratings() {
        let reviews = vec![
            classified("Yes", 3, 2, Sentiment::Neutral),
            classified("No", 3, 2, Sentiment::Negative),
        ];
        let summary = aggregate(&reviews).unwrap();

        assert_eq!(summary.row_count, 2);
        assert_eq!(
            summary.sentiment_counts,
            SentimentCounts {
                positive: 0,
                neutral: 1,
                negative: 1
            }
        );
        assert!((summary.avg_difficulty - 3.0).abs() < f64::EPSILON);
        assert!((summary.avg_overall_quality - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            summary.take_again_counts,
            BTreeMap::from([("No".to_string(), 1), ("Yes".to_string(), 1)])
        );
    }

    #[test]
    fn averages_keep_fractions() {
        let reviews = vec![
            classified("Yes", 1, 5, Sentiment::Positive),
            classified("Yes", 2, 4, Sentiment::Positive),
        ];
        let summary = aggregate(&reviews).unwrap();
        assert!((summary.avg_difficulty - 1.5).abs() < f64::EPSILON);
        assert!((summary.avg_overall_quality - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(aggregate(&[]).unwrap_err(), PipelineError::EmptyBatch);
    }

    #[test]
    fn shard_tallies_merge_to_the_whole() {
        let reviews = vec![
            classified("Yes", 1, 5, Sentiment::Positive),
            classified("No", 4, 1, Sentiment::Negative),
            classified("Yes", 2, 3, Sentiment::Neutral),
            classified("Maybe", 5, 2, Sentiment::Negative),
        ];
        let whole: Tally = reviews.iter().collect();
        let merged = reviews[..1]
            .iter()
            .collect::<Tally>()
            .merge(reviews[1..].iter().collect());

        assert_eq!(merged, whole);
        assert_eq!(merged.finish().unwrap(), aggregate(&reviews).unwrap());
    }

    #[test]
    fn shares_are_sorted_and_rounded() {
        let reviews = vec![
            classified("Yes", 1, 1, Sentiment::Neutral),
            classified("Yes", 1, 1, Sentiment::Neutral),
            classified("No", 1, 1, Sentiment::Neutral),
        ];
        let summary = aggregate(&reviews).unwrap();
        let shares = take_again_share(&summary);

        assert_eq!(
            shares,
            vec![
                ShareEntry {
                    value: "Yes".into(),
                    count: 2,
                    percent: 66.7
                },
                ShareEntry {
                    value: "No".into(),
                    count: 1,
                    percent: 33.3
                },
            ]
        );
    }
}
