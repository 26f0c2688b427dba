//! minutes-gateway - Meeting minutes and agenda summaries over HTTP
//!
//! Entry point for the minutes-gateway binary.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use minutes_gateway::cli::{Cli, Commands};
use minutes_gateway::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // A missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            minutes_gateway::cli::commands::write_completions(shell, &mut std::io::stdout());
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Serve { host, port } => {
                    minutes_gateway::cli::commands::serve(settings, host, port).await?;
                }
                Commands::Config(config_cmd) => {
                    minutes_gateway::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
