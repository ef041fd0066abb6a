use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Character, CharacterOptions, StatBlock};
use crate::domain::value_objects::OwnerId;

/// Top-level shape of the character data file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterDocument {
    pub characters: Vec<CharacterRecord>,
}

/// One character as it appears in the data file.
///
/// `owner` and `name` are optional here only so a missing field can be reported
/// by name instead of as a generic parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub owner: Option<u64>,
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub inventory: HashMap<String, f64>,
    #[serde(default)]
    pub backstory: Option<String>,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

/// A record that parsed but cannot become a [`Character`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
}

impl TryFrom<CharacterRecord> for Character {
    type Error = RecordError;

    fn try_from(record: CharacterRecord) -> Result<Self, Self::Error> {
        let owner = record.owner.ok_or(RecordError::MissingField("owner"))?;
        let name = record.name.ok_or(RecordError::MissingField("name"))?;

        let options = CharacterOptions {
            full_name: record.full_name,
            backstory: record.backstory,
            inventory: Some(record.inventory),
            stats: Some(StatBlock::from(record.stats)),
        };

        Ok(Character::new(OwnerId::new(owner), name, options))
    }
}
