//! Character entity - role-play characters owned by a platform user
//!
//! Inventory quantities are fractional. Most mutation paths prune entries whose
//! quantity drops to zero or below; `set_item_amount` is the one exception and
//! leaves pruning to an explicit `cleanup_inventory` / `cleanup_item` call.

use std::collections::HashMap;

use crate::domain::value_objects::OwnerId;

/// Item name to quantity
pub type Inventory = HashMap<String, f64>;

/// A character played by one platform user
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    owner: OwnerId,
    name: String,
    full_name: String,
    backstory: String,
    inventory: Inventory,
    stats: StatBlock,
}

/// Optional fields for [`Character::new`]
///
/// Every field left as `None` is replaced by a default when the character is built:
/// - `full_name` falls back to the character's name
/// - `backstory` falls back to `"Blob! A wild {name} has appeared."`
/// - `inventory` and `stats` start empty
#[derive(Debug, Clone, Default)]
pub struct CharacterOptions {
    pub full_name: Option<String>,
    pub backstory: Option<String>,
    pub inventory: Option<Inventory>,
    pub stats: Option<StatBlock>,
}

impl CharacterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_backstory(mut self, backstory: impl Into<String>) -> Self {
        self.backstory = Some(backstory.into());
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_stats(mut self, stats: StatBlock) -> Self {
        self.stats = Some(stats);
        self
    }
}

/// Errors raised by inventory operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InventoryError {
    #[error("Item not found in inventory: {0}")]
    ItemNotFound(String),
}

impl Character {
    pub fn new(owner: OwnerId, name: impl Into<String>, options: CharacterOptions) -> Self {
        let name = name.into();
        let full_name = options.full_name.unwrap_or_else(|| name.clone());
        let backstory = options
            .backstory
            .unwrap_or_else(|| default_backstory(&name));

        Self {
            owner,
            name,
            full_name,
            backstory,
            inventory: options.inventory.unwrap_or_default(),
            stats: options.stats.unwrap_or_default(),
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn backstory(&self) -> &str {
        &self.backstory
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Current quantity of `item`, if it is in the inventory
    pub fn item_amount(&self, item: &str) -> Option<f64> {
        self.inventory.get(item).copied()
    }

    /// Add `amount` of `item`, pruning the entry if the result is not strictly positive.
    ///
    /// A negative `amount` takes items away. Pruning an item that was never held is a no-op.
    pub fn add_item(&mut self, item: &str, amount: f64) {
        let new_amount = self.item_amount(item).unwrap_or(0.0) + amount;

        if new_amount > 0.0 {
            self.inventory.insert(item.to_string(), new_amount);
        } else {
            self.inventory.remove(item);
        }
    }

    /// Add a single `item`
    pub fn add_one(&mut self, item: &str) {
        self.add_item(item, 1.0);
    }

    /// Remove `item` entirely, returning the quantity that was held
    pub fn remove_item(&mut self, item: &str) -> Result<f64, InventoryError> {
        self.inventory
            .remove(item)
            .ok_or_else(|| InventoryError::ItemNotFound(item.to_string()))
    }

    /// Overwrite the quantity of `item`.
    ///
    /// Zero and negative amounts are stored as given; nothing is pruned here.
    pub fn set_item_amount(&mut self, item: &str, amount: f64) {
        self.inventory.insert(item.to_string(), amount);
    }

    /// Drop every entry whose quantity is not strictly positive
    pub fn cleanup_inventory(&mut self) {
        self.inventory.retain(|_, amount| *amount > 0.0);
    }

    /// Drop `item` if `amount` (or, when `None`, its current quantity) is not strictly positive.
    ///
    /// Without an explicit amount the item has to be present.
    pub fn cleanup_item(&mut self, item: &str, amount: Option<f64>) -> Result<(), InventoryError> {
        let amount = match amount {
            Some(amount) => amount,
            None => self
                .item_amount(item)
                .ok_or_else(|| InventoryError::ItemNotFound(item.to_string()))?,
        };

        if amount <= 0.0 {
            self.inventory.remove(item);
        }
        Ok(())
    }
}

fn default_backstory(name: &str) -> String {
    format!("Blob! A wild {} has appeared.", name)
}

/// Character stats (system-agnostic, never interpreted here)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatBlock {
    /// Map of stat name to value
    pub stats: HashMap<String, f64>,
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stat(mut self, name: impl Into<String>, value: f64) -> Self {
        self.stats.insert(name.into(), value);
        self
    }

    pub fn get_stat(&self, name: &str) -> Option<f64> {
        self.stats.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

impl From<HashMap<String, f64>> for StatBlock {
    fn from(stats: HashMap<String, f64>) -> Self {
        Self { stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob() -> Character {
        Character::new(OwnerId::new(1), "Blob", CharacterOptions::new())
    }

    fn blob_with(items: &[(&str, f64)]) -> Character {
        let inventory = items
            .iter()
            .map(|(item, amount)| (item.to_string(), *amount))
            .collect();
        Character::new(
            OwnerId::new(1),
            "Blob",
            CharacterOptions::new().with_inventory(inventory),
        )
    }

    #[test]
    fn test_defaults_are_derived_from_name() {
        let character = blob();

        assert_eq!(character.owner(), OwnerId::new(1));
        assert_eq!(character.full_name(), "Blob");
        assert_eq!(character.backstory(), "Blob! A wild Blob has appeared.");
        assert!(character.inventory().is_empty());
        assert!(character.stats().is_empty());
    }

    #[test]
    fn test_supplied_options_win_over_defaults() {
        let character = Character::new(
            OwnerId::new(7),
            "Erna",
            CharacterOptions::new()
                .with_full_name("Erna of the Fens")
                .with_backstory("Raised by herons.")
                .with_stats(StatBlock::new().with_stat("wit", 3.0)),
        );

        assert_eq!(character.full_name(), "Erna of the Fens");
        assert_eq!(character.backstory(), "Raised by herons.");
        assert_eq!(character.stats().get_stat("wit"), Some(3.0));
    }

    #[test]
    fn test_add_item_accumulates() {
        let mut character = blob_with(&[("Leaf", 2.0)]);

        character.add_item("Leaf", 1.5);
        character.add_one("Stick");

        assert_eq!(character.item_amount("Leaf"), Some(3.5));
        assert_eq!(character.item_amount("Stick"), Some(1.0));
    }

    #[test]
    fn test_add_item_prunes_non_positive_result() {
        let mut character = blob_with(&[("Leaf", 2.0), ("Stone", 1.0)]);

        character.add_item("Leaf", -2.0);
        character.add_item("Stone", -5.0);

        assert_eq!(character.item_amount("Leaf"), None);
        assert_eq!(character.item_amount("Stone"), None);
        assert!(character.inventory().is_empty());
    }

    #[test]
    fn test_add_item_result_is_sum_or_pruned() {
        for start in [None, Some(0.5), Some(2.0)] {
            for delta in [-3.0, -0.5, 0.0, 1.0] {
                let mut character = match start {
                    Some(amount) => blob_with(&[("Leaf", amount)]),
                    None => blob(),
                };

                character.add_item("Leaf", delta);

                let expected = start.unwrap_or(0.0) + delta;
                if expected > 0.0 {
                    assert_eq!(
                        character.item_amount("Leaf"),
                        Some(expected),
                        "start {start:?}, delta {delta}"
                    );
                } else {
                    assert_eq!(
                        character.item_amount("Leaf"),
                        None,
                        "start {start:?}, delta {delta}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_add_item_on_absent_item() {
        let mut character = blob();

        character.add_item("Leaf", 0.0);
        assert!(character.inventory().is_empty());

        character.add_item("Leaf", -1.0);
        assert!(character.inventory().is_empty());

        character.add_item("Leaf", 0.25);
        assert_eq!(character.item_amount("Leaf"), Some(0.25));
    }

    #[test]
    fn test_remove_item() {
        let mut character = blob_with(&[("Leaf", 2.0)]);

        assert_eq!(character.remove_item("Leaf"), Ok(2.0));
        assert_eq!(
            character.remove_item("Leaf"),
            Err(InventoryError::ItemNotFound("Leaf".to_string()))
        );
    }

    #[test]
    fn test_set_item_amount_does_not_prune() {
        let mut character = blob_with(&[("Leaf", 2.0)]);

        character.set_item_amount("Leaf", 0.0);
        character.set_item_amount("Debt", -5.0);

        assert_eq!(character.item_amount("Leaf"), Some(0.0));
        assert_eq!(character.item_amount("Debt"), Some(-5.0));
    }

    #[test]
    fn test_cleanup_inventory_is_idempotent() {
        let mut character = blob_with(&[("Leaf", 2.0), ("Twig", 0.0), ("Debt", -5.0)]);

        character.cleanup_inventory();
        let once = character.inventory().clone();
        character.cleanup_inventory();

        assert_eq!(character.inventory(), &once);
        assert_eq!(once.len(), 1);
        assert_eq!(once.get("Leaf"), Some(&2.0));
    }

    #[test]
    fn test_cleanup_item_uses_current_amount_by_default() {
        let mut character = blob_with(&[("Leaf", 3.0), ("Twig", 0.0)]);

        character.cleanup_item("Leaf", None).expect("Leaf is present");
        character.cleanup_item("Twig", None).expect("Twig is present");

        assert_eq!(character.item_amount("Leaf"), Some(3.0));
        assert_eq!(character.item_amount("Twig"), None);
    }

    #[test]
    fn test_cleanup_item_with_explicit_amount() {
        let mut character = blob_with(&[("Leaf", 3.0)]);

        character.cleanup_item("Leaf", Some(1.0)).unwrap();
        assert_eq!(character.item_amount("Leaf"), Some(3.0));

        character.cleanup_item("Leaf", Some(0.0)).unwrap();
        assert_eq!(character.item_amount("Leaf"), None);

        // Nothing to prune, and an explicit amount does not need the item
        assert!(character.cleanup_item("Leaf", Some(-1.0)).is_ok());
    }

    #[test]
    fn test_cleanup_item_missing_without_amount_fails() {
        let mut character = blob();

        assert_eq!(
            character.cleanup_item("Leaf", None),
            Err(InventoryError::ItemNotFound("Leaf".to_string()))
        );
    }
}
