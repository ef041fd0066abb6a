//! Chat gateway port - Interface to the chat platform connection
//!
//! The gateway owns the connection, turns inbound slash-command invocations
//! into [`Interaction`]s and delivers text replies. It knows nothing about characters.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::value_objects::{GuildId, OwnerId};

/// Kind of value a command option accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
}

/// A single option of a slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OptionKind,
    pub required: bool,
}

/// A slash command as registered with the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Guild the command is visible in
    pub scope: GuildId,
    pub options: Vec<CommandOption>,
}

/// One inbound command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// Platform user that invoked the command
    pub caller: OwnerId,
    /// Command name without the leading slash
    pub command: String,
    /// Option values keyed by option name; absent options are simply missing
    pub options: HashMap<String, String>,
}

impl Interaction {
    pub fn new(caller: OwnerId, command: impl Into<String>) -> Self {
        Self {
            caller,
            command: command.into(),
            options: HashMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }
}

/// Errors raised by a gateway adapter
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Gateway I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gateway is not connected")]
    NotConnected,

    #[error("Gateway rejected credentials: {0}")]
    Unauthorized(String),
}

/// Port for the chat platform connection
#[async_trait]
pub trait ChatGateway: Send {
    /// Open the connection using the bot token
    async fn connect(&mut self, token: &str) -> Result<(), GatewayError>;

    /// Register slash commands with the platform
    async fn register_commands(
        &mut self,
        commands: &[CommandDefinition],
    ) -> Result<(), GatewayError>;

    /// Wait for the next command invocation; `None` once the connection is closed
    async fn next_interaction(&mut self) -> Result<Option<Interaction>, GatewayError>;

    /// Send a text reply to an interaction
    async fn reply(
        &mut self,
        interaction: &Interaction,
        content: &str,
    ) -> Result<(), GatewayError>;
}
