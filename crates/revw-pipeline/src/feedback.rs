//! Canned responses keyed by sentiment.

use revw_core::Sentiment;

pub const POSITIVE_FEEDBACK: &str =
    "Thank you for the positive feedback! We're glad you had a great experience.";
pub const NEUTRAL_FEEDBACK: &str =
    "Thank you for your feedback! We will continue to work on improving the course.";
pub const NEGATIVE_FEEDBACK: &str =
    "We're sorry you had a negative experience. Your feedback will help us improve.";

/// The automated response for a review with the given sentiment.
#[must_use]
pub const fn feedback_for(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => POSITIVE_FEEDBACK,
        Sentiment::Neutral => NEUTRAL_FEEDBACK,
        Sentiment::Negative => NEGATIVE_FEEDBACK,
    }
}
