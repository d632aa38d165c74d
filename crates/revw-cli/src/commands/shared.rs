use std::path::Path;

use anyhow::Context;
use revw_core::PipelineOutput;

use crate::context::AppContext;
use crate::progress::Progress;

/// Read a review file and run it through the pipeline.
pub fn load_and_run(input: &Path, ctx: &AppContext) -> anyhow::Result<PipelineOutput> {
    let progress = Progress::spinner(&format!("Reading {}", input.display()));

    let batch = match revw_tabular::read_path(input) {
        Ok(batch) => batch,
        Err(error) => {
            progress.finish_err("read failed");
            return Err(error).with_context(|| format!("failed to read {}", input.display()));
        }
    };

    progress.set_message(&format!("Processing {} reviews", batch.len()));
    let result = ctx.pipeline.run(&batch);
    match result {
        Ok(output) => {
            progress.finish_clear();
            Ok(output)
        }
        Err(error) => {
            progress.finish_err(error.kind().as_str());
            Err(error).with_context(|| format!("failed to process {}", input.display()))
        }
    }
}

/// Display form of an input path.
pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}
