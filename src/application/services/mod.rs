//! Application services - Use case implementations
//!
//! Command handlers for the chat runtime, plus the shutdown signal the `stop`
//! command raises.

pub mod command_service;
pub mod shutdown;

pub use command_service::{
    command_definitions, render_character, BotCommand, CommandService, DEFAULT_FAREWELL,
    NOT_FOUND_REPLY,
};
pub use shutdown::Shutdown;
