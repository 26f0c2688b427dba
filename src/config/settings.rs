//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::GatewayError;

/// Environment variable holding the upstream API key
pub const API_KEY_ENV: &str = "MINUTES_GATEWAY_API_KEY";

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "MINUTES_GATEWAY_PORT";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Chat-completion provider settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Prompt template settings
    #[serde(default)]
    pub prompts: PromptSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (deepseek, openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key for the provider
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API base URL (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Template used for minutes until a custom prompt is set (empty = built-in)
    #[serde(default)]
    pub default_template: String,
}

// Default value functions

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_llm_provider() -> String {
    "deepseek".to_string()
}

fn default_llm_model() -> String {
    "deepseek-chat".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let mut settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            Self::from_toml(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?
        } else {
            tracing::debug!("No config file found, using defaults");
            Self::default()
        };

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text, filling in defaults for missing keys.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.llm.api_key.trim().is_empty() {
            if let Some(key) = lookup(API_KEY_ENV) {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }

        if let Some(port) = lookup(PORT_ENV) {
            match port.trim().parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {}: {:?}", PORT_ENV, port),
            }
        }
    }

    /// Return the API key, or a startup error naming where to set it.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        let key = self.llm.api_key.trim();
        if key.is_empty() {
            return Err(GatewayError::Config(format!(
                "API key is missing. Set llm.api_key in config or {}.",
                API_KEY_ENV
            )));
        }
        Ok(key)
    }

    /// Address string the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "minutes", "minutes-gateway")
            .context("Could not determine config directory")?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
