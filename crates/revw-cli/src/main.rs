use anyhow::Context;
use clap::Parser;
use revw_config::RevwConfig;

mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

fn main() {
    if let Err(error) = run() {
        eprintln!("revw error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = RevwConfig::load_with_dotenv().context("failed to load revw configuration")?;
    tracing::debug!(
        parallel = config.pipeline.parallel,
        export_format = %config.export.format,
        "config loaded"
    );

    let ctx = context::AppContext::new(config);
    commands::dispatch::dispatch(&cli.command, &ctx, &flags)
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("REVW_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Default log level when `REVW_LOG` is unset. `--quiet` wins over `--verbose`.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}
