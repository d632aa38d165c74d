//! The polarity scoring seam.

use std::sync::Arc;

/// Maps text to a continuous polarity in `[-1, 1]`.
///
/// Implementations must be deterministic for identical input and return `0.0`
/// for text without sentiment-bearing content (including the empty string).
/// Scorers are shared across worker threads, hence `Send + Sync`.
pub trait PolarityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for &S {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Arc<S> {
    fn score(&self, text: &str) -> f64 {
        (**self).score(text)
    }
}

/// Adapts a plain function or closure into a [`PolarityScorer`].
#[derive(Debug, Clone, Copy)]
pub struct FnScorer<F>(pub F);

impl<F> PolarityScorer for FnScorer<F>
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, text: &str) -> f64 {
        (self.0)(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_and_pointers_score_through_the_trait() {
        let constant = FnScorer(|_: &str| 0.25);
        assert!((constant.score("anything") - 0.25).abs() < f64::EPSILON);

        let boxed: Box<dyn PolarityScorer> = Box::new(FnScorer(|text: &str| {
            if text.is_empty() { 0.0 } else { -0.5 }
        }));
        assert!((boxed.score("") - 0.0).abs() < f64::EPSILON);
        assert!((boxed.score("x") + 0.5).abs() < f64::EPSILON);

        let shared: Arc<dyn PolarityScorer> = Arc::new(constant);
        assert!((shared.score("y") - 0.25).abs() < f64::EPSILON);
    }
}
