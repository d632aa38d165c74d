use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Process(args) => commands::process::handle(args, ctx, flags),
        Commands::Report(args) => commands::report::handle(args, ctx, flags),
        Commands::Feedback(args) => commands::feedback::handle(args, ctx, flags),
        Commands::Classify(args) => commands::classify::handle(args, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
