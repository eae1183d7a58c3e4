//! Marquee CLI - Command-line interface
//!
//! Starts the web server or runs one-off searches against the configured
//! movie provider and analytics backend.

mod commands;

use std::path::PathBuf;

use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};
use marquee_core::{MarqueeConfig, MarqueeError, RuntimeMode};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Debounced movie search with trending analytics")]
#[command(version)]
struct Cli {
    /// Console log level; RUST_LOG takes precedence
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    /// Runtime mode: production uses TMDB and Appwrite, development runs offline
    #[arg(long, global = true, default_value_t = RuntimeMode::Development)]
    mode: RuntimeMode,

    /// Directory for the per-run trace log
    #[arg(long, global = true, default_value = "logs")]
    logs_dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = init_tracing(cli.log_level.as_tracing_level(), Some(&cli.logs_dir))?;
    tracing::debug!(path = %log_path.display(), mode = %cli.mode, "Trace log initialised");

    match run(cli).await {
        Err(e) => match e.downcast_ref::<MarqueeError>() {
            Some(marquee_error) if marquee_error.is_user_error() => {
                eprintln!("{}", marquee_error.user_message());
                std::process::exit(2);
            }
            _ => Err(e),
        },
        Ok(()) => Ok(()),
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = MarqueeConfig::from_env(cli.mode).map_err(MarqueeError::from)?;
    commands::handle_command(cli.command, config, cli.mode).await
}
