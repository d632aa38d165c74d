use revw_core::responses::ClassifyResponse;
use revw_pipeline::feedback_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClassifyArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `revw classify`.
pub fn handle(args: &ClassifyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let responses = classify_texts(&args.texts, ctx);
    output(&responses, flags.format)
}

fn classify_texts(texts: &[String], ctx: &AppContext) -> Vec<ClassifyResponse> {
    texts
        .iter()
        .map(|text| {
            let classification = ctx.pipeline.classifier().classify(text);
            ClassifyResponse {
                text: text.clone(),
                polarity: classification.polarity,
                sentiment: classification.sentiment,
                feedback: feedback_for(classification.sentiment).to_string(),
            }
        })
        .collect()
}
