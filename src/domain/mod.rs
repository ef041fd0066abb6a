//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character and its inventory rules
//! - Value Objects: platform identifiers
//!
//! Nothing in here knows about JSON, the chat platform or the async runtime.

pub mod entities;
pub mod value_objects;
