//! Data Transfer Objects - For data-file boundaries
//!
//! DTOs live in the application layer so infrastructure can
//! serialize/deserialize without pulling serde into the domain model.

pub mod character;

pub use character::{CharacterDocument, CharacterRecord, RecordError};
