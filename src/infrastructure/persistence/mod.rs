//! Persistence adapters
//!
//! Characters are read once from a JSON file and held in memory. Nothing is
//! written back.

mod character_store;

pub use character_store::{CharacterStore, LoadError};
