//! End-to-end pipeline behaviour over small in-memory batches.

use pretty_assertions::assert_eq;
use revw_core::{CellValue, PipelineError, RawBatch, RawReview, Sentiment, SentimentCounts};
use revw_pipeline::feedback::{NEGATIVE_FEEDBACK, NEUTRAL_FEEDBACK};
use revw_pipeline::{PipelineOptions, ReviewPipeline};
use revw_sentiment::LexiconScorer;

fn pipeline() -> ReviewPipeline<LexiconScorer> {
    ReviewPipeline::new(LexiconScorer::new())
}

fn review(
    take_again: &str,
    comment: Option<&str>,
    difficulty: Option<f64>,
    quality: Option<f64>,
) -> RawReview {
    RawReview::new()
        .with("take again", take_again)
        .with("comments", comment)
        .with("difficulty", difficulty)
        .with("overall quality", quality)
}

fn two_row_batch() -> RawBatch {
    RawBatch::from_rows(vec![
        review("yes", Some(""), Some(3.0), None),
        review("NO", Some("Terrible class"), None, Some(2.0)),
    ])
}

#[test]
fn two_row_batch_is_normalized_classified_and_summarized() {
    let output = pipeline().run(&two_row_batch()).unwrap();

    let first = &output.reviews[0];
    assert_eq!(first.review.take_again, "Yes");
    assert_eq!(first.review.comment, "No comment");
    assert_eq!(first.review.difficulty, 3);
    assert_eq!(first.review.overall_quality, 2);
    assert_eq!(first.sentiment, Sentiment::Neutral);
    assert_eq!(first.feedback, NEUTRAL_FEEDBACK);

    let second = &output.reviews[1];
    assert_eq!(second.review.take_again, "No");
    assert_eq!(second.review.comment, "Terrible class");
    assert_eq!(second.review.difficulty, 3);
    assert_eq!(second.review.overall_quality, 2);
    assert_eq!(second.sentiment, Sentiment::Negative);
    assert_eq!(second.feedback, NEGATIVE_FEEDBACK);

    assert_eq!(output.summary.row_count, 2);
    assert!((output.summary.avg_difficulty - 3.0).abs() < f64::EPSILON);
    assert!((output.summary.avg_overall_quality - 2.0).abs() < f64::EPSILON);
    assert_eq!(
        output.summary.sentiment_counts,
        SentimentCounts {
            positive: 0,
            neutral: 1,
            negative: 1
        }
    );
}

#[test]
fn row_count_and_order_are_preserved() {
    let comments = ["Great prof", "Awful exams", "ok", "Really helpful", "Boring"];
    let batch = RawBatch::from_rows(
        comments
            .iter()
            .map(|c| review("yes", Some(*c), Some(2.0), Some(4.0)))
            .collect(),
    );
    let output = pipeline().run(&batch).unwrap();

    assert_eq!(output.len(), batch.len());
    let seen: Vec<&str> = output
        .reviews
        .iter()
        .map(|r| r.review.comment.as_str())
        .collect();
    assert_eq!(seen, comments);
    assert_eq!(output.summary.sentiment_counts.total(), output.len());
}

#[test]
fn rerunning_on_normalized_values_is_idempotent() {
    let first = pipeline().run(&two_row_batch()).unwrap();

    let rerun_batch = RawBatch::from_rows(
        first
            .reviews
            .iter()
            .map(|r| {
                review(
                    &r.review.take_again,
                    Some(r.review.comment.as_str()),
                    Some(r.review.difficulty as f64),
                    Some(r.review.overall_quality as f64),
                )
            })
            .collect(),
    );
    let second = pipeline().run(&rerun_batch).unwrap();

    for (a, b) in first.reviews.iter().zip(&second.reviews) {
        assert_eq!(a.review.take_again, b.review.take_again);
        assert_eq!(a.review.difficulty, b.review.difficulty);
        assert_eq!(a.review.overall_quality, b.review.overall_quality);
    }
}

#[test]
fn all_missing_difficulty_is_insufficient_data() {
    let batch = RawBatch::from_rows(vec![
        review("yes", Some("fine"), None, Some(4.0)),
        review("no", Some("meh"), None, Some(2.0)),
    ]);
    assert_eq!(
        pipeline().run(&batch).unwrap_err(),
        PipelineError::InsufficientData {
            column: "difficulty".into()
        }
    );
}

#[test]
fn empty_batch_is_rejected() {
    let batch = RawBatch::new(
        vec![
            "take again".into(),
            "comments".into(),
            "difficulty".into(),
            "overall quality".into(),
        ],
        Vec::new(),
    );
    let err = pipeline().run(&batch).unwrap_err();
    assert_eq!(err, PipelineError::EmptyBatch);
    assert_eq!(err.kind().as_str(), "EmptyBatchError");
}

#[test]
fn missing_required_column_is_a_schema_error() {
    let batch = RawBatch::from_rows(vec![
        RawReview::new()
            .with("take again", "yes")
            .with("difficulty", 3.0)
            .with("overall quality", 4.0),
    ]);
    let err = pipeline().run(&batch).unwrap_err();
    assert_eq!(
        err,
        PipelineError::MissingColumn {
            column: "comments".into()
        }
    );
    assert_eq!(err.kind().as_str(), "SchemaError");
}

#[test]
fn first_malformed_row_is_reported() {
    let batch = RawBatch::from_rows(vec![
        review("yes", Some("fine"), Some(3.0), Some(4.0)),
        RawReview::new()
            .with("take again", CellValue::Empty)
            .with("comments", "x")
            .with("difficulty", 3.0)
            .with("overall quality", 4.0),
        RawReview::new()
            .with("take again", 1.0)
            .with("comments", "y")
            .with("difficulty", 3.0)
            .with("overall quality", 4.0),
    ]);

    for options in [
        PipelineOptions::default(),
        PipelineOptions {
            parallel: true,
            parallel_threshold: 1,
        },
    ] {
        let err = pipeline().with_options(options).run(&batch).unwrap_err();
        assert!(
            matches!(err, PipelineError::MalformedCell { row: 1, .. }),
            "unexpected error {err:?} with {options:?}"
        );
    }
}

#[test]
fn placeholder_comment_gets_neutral_feedback() {
    let batch = RawBatch::from_rows(vec![review("yes", None, Some(1.0), Some(5.0))]);
    let output = pipeline().run(&batch).unwrap();
    assert_eq!(output.reviews[0].review.comment, "No comment");
    assert_eq!(output.reviews[0].sentiment, Sentiment::Neutral);
    assert_eq!(output.reviews[0].feedback, NEUTRAL_FEEDBACK);
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let comments = [
        "Great lectures",
        "",
        "Terrible grader",
        "not bad at all",
        "Very clear and fair",
        "Hard exams",
    ];
    let rows: Vec<RawReview> = (0..3000_u32)
        .map(|i| {
            let difficulty = (i % 7 != 0).then(|| f64::from(i % 5 + 1));
            let quality = (i % 11 != 0).then(|| f64::from(i % 4) + 1.5);
            let take_again = if i % 3 == 0 { "YES" } else { "no" };
            review(take_again, Some(comments[i as usize % comments.len()]), difficulty, quality)
        })
        .collect();
    let batch = RawBatch::from_rows(rows);

    let sequential = pipeline().run(&batch).unwrap();
    let parallel = pipeline()
        .with_options(PipelineOptions {
            parallel: true,
            parallel_threshold: 100,
        })
        .run(&batch)
        .unwrap();

    assert_eq!(parallel.reviews, sequential.reviews);
    assert_eq!(parallel.summary.row_count, sequential.summary.row_count);
    assert_eq!(
        parallel.summary.sentiment_counts,
        sequential.summary.sentiment_counts
    );
    assert_eq!(
        parallel.summary.take_again_counts,
        sequential.summary.take_again_counts
    );
    assert!((parallel.summary.avg_difficulty - sequential.summary.avg_difficulty).abs() < 1e-12);
    assert!(
        (parallel.summary.avg_overall_quality - sequential.summary.avg_overall_quality).abs()
            < 1e-12
    );
}
