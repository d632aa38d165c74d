use revw_core::responses::ReportResponse;
use revw_pipeline::{take_again_share, top_terms};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::{display_path, load_and_run};
use crate::context::AppContext;
use crate::output::output;

/// Handle `revw report`.
pub fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = load_and_run(&args.input, ctx)?;
    let limit = args.terms.unwrap_or(ctx.config.general.top_terms);

    let response = ReportResponse {
        input: display_path(&args.input),
        take_again_share: take_again_share(&result.summary),
        top_terms: top_terms(&result.reviews, limit),
        summary: result.summary,
    };

    output(&response, flags.format)
}
