//! Value objects - Immutable objects defined by their attributes

mod ids;

pub use ids::{GuildId, OwnerId};
