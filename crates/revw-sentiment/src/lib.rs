//! # revw-sentiment
//!
//! Polarity scoring and sentiment classification for review comments.
//!
//! Scoring sits behind the [`PolarityScorer`] trait: any lexicon-, rule-, or
//! model-based scorer producing a value in `[-1, 1]` can be plugged into the
//! [`SentimentClassifier`] without touching the rest of the pipeline.
//!
//! The default scorer is [`LexiconScorer`], a pattern-based scorer over a
//! word-polarity lexicon tuned for course reviews, with intensifier and
//! negation handling.
//!
//! # Usage
//!
//! ```
//! use revw_core::Sentiment;
//! use revw_sentiment::{LexiconScorer, SentimentClassifier};
//!
//! let classifier = SentimentClassifier::new(LexiconScorer::new());
//! assert_eq!(classifier.classify("Terrible class").sentiment, Sentiment::Negative);
//! assert_eq!(classifier.classify("No comment").sentiment, Sentiment::Neutral);
//! ```

pub mod classifier;
pub mod lexicon;
pub mod scorer;
pub mod tokenize;

pub use classifier::{Classification, SentimentClassifier};
pub use lexicon::{LexiconResult, LexiconScorer};
pub use scorer::{FnScorer, PolarityScorer};
