use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use chrono::Utc;
use revw_config::ExportConfig;
use revw_core::ExportFormat;
use revw_core::responses::ProcessResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProcessArgs;
use crate::commands::shared::{display_path, load_and_run};
use crate::context::AppContext;
use crate::output::output;

/// Handle `revw process`.
pub fn handle(args: &ProcessArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let started = Instant::now();
    let result = load_and_run(&args.input, ctx)?;

    let exported = match &args.output {
        Some(path) => {
            let (path, format) =
                export_target(path.as_deref(), args.export_format, &ctx.config.export);
            revw_tabular::export_to_path(&path, &result, &ctx.config.columns, format)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            Some(display_path(&path))
        }
        None => None,
    };

    let response = ProcessResponse {
        input: display_path(&args.input),
        rows: result.len(),
        summary: result.summary.clone(),
        output: exported,
        processed_at: Utc::now(),
        duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        reviews: args.rows.then_some(result.reviews),
    };

    output(&response, flags.format)
}

/// Decide where and how to export.
///
/// Format precedence: `--export-format`, then the output file's extension,
/// then config. Without an explicit path the configured file name is used,
/// with its extension matched to the format.
fn export_target(
    path: Option<&Path>,
    format: Option<ExportFormat>,
    config: &ExportConfig,
) -> (PathBuf, ExportFormat) {
    match path {
        Some(path) => {
            let format = format
                .or_else(|| {
                    path.extension()
                        .and_then(|ext| ext.to_str())
                        .and_then(|ext| ext.parse().ok())
                })
                .unwrap_or(config.format);
            (path.to_path_buf(), format)
        }
        None => {
            let format = format.unwrap_or(config.format);
            let path = PathBuf::from(&config.file_name).with_extension(format.extension());
            (path, format)
        }
    }
}
