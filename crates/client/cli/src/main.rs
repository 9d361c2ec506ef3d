//! Roster command-line entry point.
mod command;
mod config;
mod presentation;

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use roster_content::ContentFactory;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use command::{Cli, CommandContext};
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    cli.apply_to(&mut config);
    let _guard = setup_logging(config.log_dir.as_deref())?;

    let factory = ContentFactory::new(&config.data_dir);
    let library = factory
        .load_library()
        .with_context(|| format!("Failed to load roster data from {}", config.data_dir.display()))?;
    let settings = factory.load_config()?;

    let ctx = CommandContext {
        library: &library,
        settings: &settings,
        format: config.format,
    };
    let outcome = command::run(&cli.command, &ctx)?;
    println!("{}", outcome.output);

    if outcome.failed {
        bail!("validation failed");
    }
    Ok(())
}

/// Logs to stderr, and additionally to `<log_dir>/roster.log` when configured.
///
/// The returned guard flushes the file writer on drop; hold it for the whole run.
fn setup_logging(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "roster.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::debug!("Log file: {}/roster.log", dir.display());
    }

    Ok(guard)
}
