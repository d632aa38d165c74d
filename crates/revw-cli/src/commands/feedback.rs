use revw_core::ClassifiedReview;
use revw_core::responses::FeedbackEntry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedbackArgs;
use crate::commands::shared::load_and_run;
use crate::context::AppContext;
use crate::output::output;

/// Handle `revw feedback`.
///
/// The whole batch is processed before anything is printed, so a failing
/// row never leaves partial output behind.
pub fn handle(args: &FeedbackArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = load_and_run(&args.input, ctx)?;
    output(&feedback_entries(&result.reviews), flags.format)
}

fn feedback_entries(reviews: &[ClassifiedReview]) -> Vec<FeedbackEntry> {
    reviews
        .iter()
        .enumerate()
        .map(|(row, review)| FeedbackEntry {
            row,
            comment: review.review.comment.clone(),
            sentiment: review.sentiment,
            automated_response: review.feedback.clone(),
        })
        .collect()
}
