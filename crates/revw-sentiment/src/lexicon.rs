//! Lexicon-based polarity scorer.
//!
//! Scores text by averaging the polarity of every lexicon word it contains:
//! 1. Tokenize into lower-cased words
//! 2. Look each word up in the polarity lexicon
//! 3. Scale a match by the intensifier directly before it (`very good`)
//! 4. Flip and dampen a match preceded by a negation within two words of
//!    the same clause (`not very good` scores `-0.5 * 1.3 * 0.7`)
//!
//! The mean of the adjusted matches is clamped to `[-1, 1]`; text with no
//! matches scores exactly `0.0`.

use std::collections::{HashMap, HashSet};

use crate::scorer::PolarityScorer;
use crate::tokenize;

/// Multiplier applied to a word's polarity when it is negated.
const NEGATION_FACTOR: f64 = -0.5;

/// How many tokens back a negation still applies.
const NEGATION_WINDOW: usize = 2;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("approachable", 0.5),
    ("awesome", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("caring", 0.6),
    ("clear", 0.4),
    ("easy", 0.4),
    ("effective", 0.6),
    ("engaging", 0.5),
    ("enjoyable", 0.6),
    ("enjoyed", 0.5),
    ("excellent", 1.0),
    ("fair", 0.4),
    ("fantastic", 0.9),
    ("friendly", 0.4),
    ("fun", 0.4),
    ("funny", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.6),
    ("incredible", 0.9),
    ("informative", 0.4),
    ("inspiring", 0.7),
    ("interesting", 0.5),
    ("kind", 0.6),
    ("knowledgeable", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("nice", 0.6),
    ("organized", 0.4),
    ("outstanding", 0.8),
    ("passionate", 0.5),
    ("patient", 0.4),
    ("perfect", 1.0),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("respected", 0.4),
    ("superb", 1.0),
    ("supportive", 0.5),
    ("thorough", 0.4),
    ("useful", 0.3),
    ("wonderful", 1.0),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("avoid", -0.4),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("condescending", -0.6),
    ("confusing", -0.6),
    ("difficult", -0.5),
    ("disappointing", -0.6),
    ("disorganized", -0.6),
    ("dull", -0.5),
    ("hard", -0.3),
    ("harsh", -0.4),
    ("hate", -0.8),
    ("hated", -0.8),
    ("horrible", -1.0),
    ("impossible", -0.7),
    ("lazy", -0.3),
    ("pointless", -0.6),
    ("poor", -0.4),
    ("rude", -0.6),
    ("stressful", -0.5),
    ("tedious", -0.5),
    ("terrible", -1.0),
    ("unclear", -0.5),
    ("unfair", -0.5),
    ("unhelpful", -0.5),
    ("useless", -0.5),
    ("waste", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.4),
    ("incredibly", 1.5),
    ("kinda", 0.7),
    ("quite", 1.1),
    ("really", 1.2),
    ("slightly", 0.5),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("totally", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "aren't", "arent", "barely", "can't", "cannot", "cant", "couldn't", "couldnt", "didn't",
    "didnt", "doesn't", "doesnt", "don't", "dont", "hardly", "isn't", "isnt", "neither", "never",
    "no", "none", "nor", "not", "nothing", "shouldn't", "wasn't", "wasnt", "weren't", "werent",
    "won't", "wont", "wouldn't", "wouldnt",
];

/// Outcome of scoring one text, with the contributing words.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconResult {
    pub polarity: f64,
    /// Matched lexicon words with their adjusted polarity, in text order.
    pub matched: Vec<(String, f64)>,
}

/// Word-polarity lexicon with intensifier and negation handling.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Scorer with the built-in course-review lexicon.
    #[must_use]
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS)
            .map(|(word, score)| ((*word).to_string(), *score))
            .collect();
        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(word, factor)| ((*word).to_string(), *factor))
            .collect();
        let negations = NEGATIONS.iter().map(|word| (*word).to_string()).collect();

        Self {
            words,
            intensifiers,
            negations,
        }
    }

    /// Add or replace lexicon entries. Polarities are clamped to `[-1, 1]`.
    #[must_use]
    pub fn with_overrides<I, K>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (word, polarity) in overrides {
            self.insert(word.as_ref(), polarity);
        }
        self
    }

    /// Add or replace a single lexicon entry. Non-finite polarities are ignored.
    pub fn insert(&mut self, word: &str, polarity: f64) {
        if !polarity.is_finite() {
            tracing::warn!(word, polarity, "lexicon: ignoring non-finite polarity");
            return;
        }
        self.words
            .insert(word.trim().to_lowercase(), polarity.clamp(-1.0, 1.0));
    }

    /// Polarity of a single lexicon word, if present.
    #[must_use]
    pub fn word_polarity(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Score a text and report which words contributed.
    #[must_use]
    pub fn analyze(&self, text: &str) -> LexiconResult {
        let mut matched: Vec<(String, f64)> = Vec::new();

        // Negation and intensifiers never reach across clause punctuation.
        for clause in tokenize::clauses(text) {
            let tokens = tokenize::words(clause);
            let mut last_negation: Option<usize> = None;

            for (index, token) in tokens.iter().enumerate() {
                if self.negations.contains(token) {
                    last_negation = Some(index);
                    continue;
                }

                let Some(base) = self.words.get(token) else {
                    continue;
                };

                let mut polarity = *base;

                if let Some(factor) = index
                    .checked_sub(1)
                    .and_then(|prev| self.intensifiers.get(&tokens[prev]))
                {
                    polarity *= factor;
                }

                if last_negation.is_some_and(|at| index - at <= NEGATION_WINDOW) {
                    polarity *= NEGATION_FACTOR;
                    last_negation = None;
                }

                matched.push((token.clone(), polarity));
            }
        }

        let polarity = if matched.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let mean = matched.iter().map(|(_, p)| p).sum::<f64>() / matched.len() as f64;
            mean.clamp(-1.0, 1.0)
        };

        LexiconResult { polarity, matched }
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        self.analyze(text).polarity
    }
}
