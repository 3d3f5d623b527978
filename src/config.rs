use crate::chat::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8001";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing API key, set OPENROUTER_API_KEY or pass --api-key")]
    MissingApiKey,
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Woordspel: name something in a category starting with a given letter
#[derive(Parser, Debug)]
#[command(name = "woordspel", version)]
pub struct Cli {
    /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the chat completion service
    #[arg(long, env = "OPENROUTER_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model that judges the answers
    #[arg(long, env = "WOORDSPEL_MODEL", global = true, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Directory with extra category files (.ron or .lines)
    #[arg(long, env = "WOORDSPEL_CATEGORIES", global = true)]
    pub categories: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,
    /// Serve the game to browsers over websockets
    Serve {
        #[arg(long, env = "WOORDSPEL_BIND", default_value = DEFAULT_BIND)]
        bind: String,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }

    /// The configured key, blank counts as missing
    pub fn api_key(&self) -> Option<String> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
    }
}

/// Everything the browser server needs, checked up front
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub categories: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_cli(cli: &Cli, bind: &str) -> Result<Self, ConfigError> {
        let bind_address = bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("WOORDSPEL_BIND".to_string(), e.to_string()))?;

        let api_key = cli.api_key().ok_or(ConfigError::MissingApiKey)?;

        Ok(ServerConfig {
            bind_address,
            api_key,
            base_url: cli.base_url.clone(),
            model: cli.model.clone(),
            categories: cli.categories.clone(),
        })
    }
}
