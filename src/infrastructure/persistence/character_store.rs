//! In-memory character store loaded once from a JSON data file

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::application::dto::{CharacterDocument, RecordError};
use crate::domain::entities::Character;
use crate::domain::value_objects::OwnerId;

/// Errors raised while building a [`CharacterStore`]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read character data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed character data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Character record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Characters indexed by owner and by name.
///
/// Membership is fixed once built. Both indices point into the same list, so a
/// character reached through either index is the same instance. When two records
/// share an owner or a name, the later record takes the index entry.
#[derive(Debug, Default)]
pub struct CharacterStore {
    characters: Vec<Character>,
    by_owner: HashMap<OwnerId, usize>,
    by_name: HashMap<String, usize>,
}

impl CharacterStore {
    /// Read and parse the data file at `path`
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&contents)?;
        info!("Loaded {} characters", store.len());
        Ok(store)
    }

    /// Parse a `{"characters": [...]}` document.
    ///
    /// Every record is converted before any index is built, so a failure yields no store at all.
    pub fn from_json(contents: &str) -> Result<Self, LoadError> {
        let document: CharacterDocument = serde_json::from_str(contents)?;

        let characters = document
            .characters
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                Character::try_from(record).map_err(|e| match e {
                    RecordError::MissingField(field) => LoadError::MissingField { index, field },
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_characters(characters))
    }

    /// Index already constructed characters
    pub fn from_characters(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut store = Self::default();

        for character in characters {
            let slot = store.characters.len();

            if let Some(previous) = store.by_owner.insert(character.owner(), slot) {
                warn!(
                    owner = %character.owner(),
                    replaced = store.characters[previous].name(),
                    "Duplicate owner in character data, keeping the later record"
                );
            }
            if store.by_name.insert(character.name().to_string(), slot).is_some() {
                warn!(
                    name = character.name(),
                    "Duplicate name in character data, keeping the later record"
                );
            }

            debug!(owner = %character.owner(), name = character.name(), "Indexed character");
            store.characters.push(character);
        }

        store
    }

    /// Character played by `owner`, or `None` if they have none
    pub fn find_by_owner(&self, owner: OwnerId) -> Option<&Character> {
        self.by_owner.get(&owner).map(|&slot| &self.characters[slot])
    }

    /// Character called `name`, or `None` if nobody is
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.by_name.get(name).map(|&slot| &self.characters[slot])
    }

    pub fn find_by_owner_mut(&mut self, owner: OwnerId) -> Option<&mut Character> {
        let slot = *self.by_owner.get(&owner)?;
        self.characters.get_mut(slot)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Character> {
        let slot = *self.by_name.get(name)?;
        self.characters.get_mut(slot)
    }

    /// Number of records loaded (including ones shadowed by a later duplicate)
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_end_to_end_defaults() {
        let store = CharacterStore::from_json(
            r#"{"characters":[{"owner":1,"name":"Blob","inventory":{"Leaf":2}}]}"#,
        )
        .expect("document should load");

        let blob = store.find_by_owner(OwnerId::new(1)).expect("owner 1 has a character");
        assert_eq!(blob.full_name(), "Blob");
        assert_eq!(blob.backstory(), "Blob! A wild Blob has appeared.");
        assert_eq!(blob.inventory().len(), 1);
        assert_eq!(blob.item_amount("Leaf"), Some(2.0));

        let by_name = store.find_by_name("Blob").expect("Blob is indexed by name");
        assert_eq!(by_name.owner(), OwnerId::new(1));
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let store = CharacterStore::from_json(r#"{"characters":[]}"#).unwrap();

        assert!(store.is_empty());
        assert!(store.find_by_name("nonexistent").is_none());
        assert!(store.find_by_owner(OwnerId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_owner_last_write_wins() {
        let store = CharacterStore::from_json(
            r#"{"characters":[
                {"owner":1,"name":"First"},
                {"owner":1,"name":"Second"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_owner(OwnerId::new(1)).unwrap().name(), "Second");
        // The shadowed record is still reachable through its own name
        assert_eq!(store.find_by_name("First").unwrap().owner(), OwnerId::new(1));
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let store = CharacterStore::from_json(
            r#"{"characters":[
                {"owner":1,"name":"Blob","full_name":"Old Blob"},
                {"owner":2,"name":"Blob","full_name":"New Blob"}
            ]}"#,
        )
        .unwrap();

        let blob = store.find_by_name("Blob").unwrap();
        assert_eq!(blob.owner(), OwnerId::new(2));
        assert_eq!(blob.full_name(), "New Blob");
    }

    #[test]
    fn test_malformed_documents() {
        for contents in [
            "not json",
            r#"{"people":[]}"#,
            r#"{"characters":{"owner":1}}"#,
            r#"{"characters":[{"owner":"one","name":"Blob"}]}"#,
            r#"{"characters":[{"owner":1,"name":"Blob","inventory":{"Leaf":"two"}}]}"#,
        ] {
            let result = CharacterStore::from_json(contents);
            assert!(
                matches!(result, Err(LoadError::Malformed(_))),
                "expected malformed error for {contents}"
            );
        }
    }

    #[test]
    fn test_missing_required_field() {
        let result = CharacterStore::from_json(
            r#"{"characters":[{"owner":1,"name":"Blob"},{"name":"Nobody"}]}"#,
        );
        assert!(matches!(
            result,
            Err(LoadError::MissingField { index: 1, field: "owner" })
        ));

        let result = CharacterStore::from_json(r#"{"characters":[{"owner":1}]}"#);
        assert!(matches!(
            result,
            Err(LoadError::MissingField { index: 0, field: "name" })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(
            file,
            r#"{{"characters":[{{"owner":5,"name":"Erna","backstory":"Fell once."}}]}}"#
        )
        .unwrap();

        let store = CharacterStore::load(file.path()).expect("file should load");
        assert_eq!(store.find_by_name("Erna").unwrap().backstory(), "Fell once.");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CharacterStore::load(&dir.path().join("game.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_mutation_through_store_is_shared_by_both_indices() {
        let mut store =
            CharacterStore::from_json(r#"{"characters":[{"owner":3,"name":"Blob"}]}"#).unwrap();

        store
            .find_by_owner_mut(OwnerId::new(3))
            .expect("owner 3 has a character")
            .add_item("Leaf", 2.0);

        assert_eq!(store.find_by_name("Blob").unwrap().item_amount("Leaf"), Some(2.0));
        assert!(store.find_by_name_mut("Nobody").is_none());
    }
}
