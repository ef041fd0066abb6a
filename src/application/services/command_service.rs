//! Command Service - Handlers for the bot's slash commands
//!
//! Handlers only read the character store. Lookup misses become a user-facing
//! reply, never an error.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use super::shutdown::Shutdown;
use crate::application::ports::outbound::{
    CommandDefinition, CommandOption, Interaction, OptionKind,
};
use crate::domain::entities::Character;
use crate::domain::value_objects::{GuildId, OwnerId};
use crate::infrastructure::persistence::CharacterStore;

/// Message sent by `stop` when the caller gives none
pub const DEFAULT_FAREWELL: &str = "Have a nice day.";

/// Reply to `info` when no character matches
pub const NOT_FOUND_REPLY: &str = "Cannot find any character with this name or belonging to you.";

/// A parsed slash command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    /// Show a character sheet; the caller's own character when `name` is absent
    Info { name: Option<String> },
    /// Say goodbye and shut the bot down
    Stop { message: Option<String> },
}

impl BotCommand {
    /// Parse an interaction, `None` for commands this bot does not know
    pub fn from_interaction(interaction: &Interaction) -> Option<Self> {
        let option = |name: &str| interaction.option(name).map(str::to_string);

        match interaction.command.as_str() {
            "info" => Some(Self::Info {
                name: option("name"),
            }),
            "stop" => Some(Self::Stop {
                message: option("message"),
            }),
            _ => None,
        }
    }
}

/// Slash commands to register in `scope`
pub fn command_definitions(scope: GuildId) -> Vec<CommandDefinition> {
    vec![
        CommandDefinition {
            name: "stop",
            description: "Stops erna!",
            scope,
            options: vec![CommandOption {
                name: "message",
                description: "One last message",
                kind: OptionKind::String,
                required: false,
            }],
        },
        CommandDefinition {
            name: "info",
            description: "Displays information about a character",
            scope,
            options: vec![CommandOption {
                name: "name",
                description: "The name of the character. If not given, your character will be used.",
                kind: OptionKind::String,
                required: false,
            }],
        },
    ]
}

/// Render the public part of a character sheet
pub fn render_character(character: &Character) -> String {
    format!(
        "Name: {}\nFull Name: {}\nBackstory: {}",
        character.name(),
        character.full_name(),
        character.backstory()
    )
}

/// Handles command invocations against the shared character store
#[derive(Clone)]
pub struct CommandService {
    store: Arc<RwLock<CharacterStore>>,
    shutdown: Shutdown,
}

impl CommandService {
    pub fn new(store: Arc<RwLock<CharacterStore>>, shutdown: Shutdown) -> Self {
        Self { store, shutdown }
    }

    /// Handle one interaction and produce the reply text
    #[instrument(skip(self, interaction), fields(caller = %interaction.caller, command = %interaction.command))]
    pub async fn handle(&self, interaction: &Interaction) -> String {
        match BotCommand::from_interaction(interaction) {
            Some(BotCommand::Info { name }) => self.info(interaction.caller, name.as_deref()).await,
            Some(BotCommand::Stop { message }) => self.stop(message.as_deref()),
            None => {
                debug!("Ignoring unknown command");
                format!("Unknown command: /{}", interaction.command)
            }
        }
    }

    /// Describe the character called `name`, or the caller's own character
    pub async fn info(&self, caller: OwnerId, name: Option<&str>) -> String {
        let store = self.store.read().await;
        let character = match name {
            Some(name) => store.find_by_name(name),
            None => store.find_by_owner(caller),
        };

        match character {
            Some(character) => render_character(character),
            None => {
                debug!(?name, "No matching character");
                NOT_FOUND_REPLY.to_string()
            }
        }
    }

    /// Raise the shutdown signal and return the farewell reply.
    ///
    /// The runtime sends the reply before it acts on the signal.
    pub fn stop(&self, message: Option<&str>) -> String {
        let message = message.unwrap_or(DEFAULT_FAREWELL);
        info!("Stop requested");
        self.shutdown.trigger();
        format!("Erna has fallen! {}", message)
    }
}
