//! Erna - chat bot serving role-play character sheets
//!
//! The bot:
//! - Loads the character list from a JSON file once at startup
//! - Registers the `info` and `stop` slash commands
//! - Answers `info` from the in-memory character store
//! - Shuts down when `stop` is invoked

pub mod application;
pub mod domain;
pub mod infrastructure;
