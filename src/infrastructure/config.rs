//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::value_objects::GuildId;

/// Application configuration loaded from environment
#[derive(Clone)]
pub struct AppConfig {
    /// Bot connection token
    pub discord_token: String,

    /// Character data file
    pub characters_path: PathBuf,

    /// Guild the slash commands are registered in
    pub command_scope: GuildId,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            discord_token: lookup("DISCORD_TOKEN")
                .filter(|token| !token.trim().is_empty())
                .context("DISCORD_TOKEN environment variable is required")?,

            characters_path: lookup("CHARACTERS_PATH")
                .unwrap_or_else(|| "./game.json".to_string())
                .into(),

            command_scope: lookup("COMMAND_SCOPE")
                .unwrap_or_else(|| "833376462803173427".to_string())
                .parse()
                .context("COMMAND_SCOPE must be a numeric guild id")?,
        })
    }
}

// Keeps the token out of logs
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("discord_token", &"<redacted>")
            .field("characters_path", &self.characters_path)
            .field("command_scope", &self.command_scope)
            .finish()
    }
}
