//! Most frequent words across a batch's comments.

use std::collections::HashMap;

use revw_core::columns::PLACEHOLDER_COMMENT;
use revw_core::responses::TermCount;
use revw_core::ClassifiedReview;
use revw_sentiment::tokenize;

const MIN_TERM_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "about", "after", "again", "all", "also", "and", "any", "are", "because", "been", "before",
    "but", "can", "class", "could", "did", "does", "doing", "each", "for", "from", "get", "had",
    "has", "have", "her", "here", "him", "his", "how", "its", "just", "more", "most", "much",
    "not", "now", "off", "one", "only", "other", "our", "out", "own", "professor", "same", "she",
    "should", "some", "such", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "too", "very", "was", "were", "what", "when", "where",
    "which", "while", "who", "why", "will", "with", "would", "you", "your",
];

/// Count comment words and return the `limit` most frequent.
///
/// Stopwords, words shorter than three characters, and placeholder comments
/// are skipped. Ties are broken alphabetically.
#[must_use]
pub fn top_terms(reviews: &[ClassifiedReview], limit: usize) -> Vec<TermCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for review in reviews {
        let comment = review.review.comment.as_str();
        if comment == PLACEHOLDER_COMMENT {
            continue;
        }
        for word in tokenize::words(comment) {
            if word.chars().count() < MIN_TERM_LEN || STOPWORDS.contains(&word.as_str()) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut terms: Vec<TermCount> = counts
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect();
    terms.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
    terms.truncate(limit);
    terms
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use revw_core::{NormalizedReview, Sentiment};

    use super::*;

    fn with_comment(comment: &str) -> ClassifiedReview {
        ClassifiedReview {
            review: NormalizedReview {
                take_again: "Yes".into(),
                comment: comment.into(),
                difficulty: 3,
                overall_quality: 3,
                passthrough: BTreeMap::new(),
            },
            polarity: 0.0,
            sentiment: Sentiment::Neutral,
            feedback: String::new(),
        }
    }

    fn term(term: &str, count: usize) -> TermCount {
        TermCount {
            term: term.into(),
            count,
        }
    }

    #[test]
    fn counts_words_across_comments() {
        let reviews = vec![
            with_comment("Great lectures, great exams"),
            with_comment("Exams were hard"),
            with_comment("No comment"),
        ];
        assert_eq!(
            top_terms(&reviews, 10),
            vec![
                term("exams", 2),
                term("great", 2),
                term("hard", 1),
                term("lectures", 1)
            ]
        );
    }

    #[test]
    fn skips_stopwords_and_short_words() {
        let reviews = vec![with_comment("It is the class of an ok prof")];
        assert_eq!(top_terms(&reviews, 10), vec![term("prof", 1)]);
    }

    #[test]
    fn limit_truncates() {
        let reviews = vec![with_comment("alpha beta gamma alpha")];
        assert_eq!(top_terms(&reviews, 1), vec![term("alpha", 2)]);
        assert!(top_terms(&reviews, 0).is_empty());
    }
}
