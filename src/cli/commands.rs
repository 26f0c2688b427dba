//! CLI command implementations

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::cli::args::{Cli, ConfigCommand};
use crate::config::Settings;

/// Start the HTTP gateway
pub async fn serve(mut settings: Settings, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    crate::server::serve(&settings).await
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let command_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, command_name, out);
}
