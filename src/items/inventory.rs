//! Inventory system
//!
//! Ordered item storage. Display order is acquisition order and duplicates are allowed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{Item, ItemCategory, QUALIFYING_WEAPON};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("no item at position {index} (inventory holds {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Player inventory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the item at `index`, shifting later items down
    pub fn remove_at(&mut self, index: usize) -> Result<Item, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Get items of a specific category, in acquisition order
    pub fn items_of_category(&self, category: ItemCategory) -> Vec<&Item> {
        self.items.iter().filter(|i| i.category == category).collect()
    }

    /// Highest-power item of a category. Ties go to the earliest acquired.
    pub fn best_of_category(&self, category: ItemCategory) -> Option<&Item> {
        self.items
            .iter()
            .filter(|i| i.category == category)
            .fold(None, |best: Option<&Item>, item| match best {
                Some(b) if b.power >= item.power => Some(b),
                _ => Some(item),
            })
    }

    /// A steel sword plus any armor opens the way to the dragon
    pub fn has_qualifying_loadout(&self) -> bool {
        let has_steel_sword = self
            .items
            .iter()
            .any(|i| i.category == ItemCategory::Weapon && i.name == QUALIFYING_WEAPON);
        let has_armor = self.items.iter().any(|i| i.category == ItemCategory::Armor);
        has_steel_sword && has_armor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::item::ItemKind;

    fn inventory_of(kinds: &[ItemKind]) -> Inventory {
        let mut inventory = Inventory::new();
        for kind in kinds {
            inventory.add(kind.template());
        }
        inventory
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let inventory = inventory_of(&[ItemKind::Sword, ItemKind::HealthPotion, ItemKind::Sword]);
        let names: Vec<&str> = inventory.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Sword", "Health Potion", "Sword"]);
    }

    #[test]
    fn test_remove_at_shifts() {
        let mut inventory =
            inventory_of(&[ItemKind::Sword, ItemKind::HealthPotion, ItemKind::WoodenShield]);
        let removed = inventory.remove_at(1).unwrap();
        assert_eq!(removed.name, "Health Potion");
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.get(1).unwrap().name, "Wooden Shield");
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut inventory = inventory_of(&[ItemKind::Sword]);
        assert_eq!(
            inventory.remove_at(1),
            Err(InventoryError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_items_of_category() {
        let inventory = inventory_of(&[
            ItemKind::IronShield,
            ItemKind::Sword,
            ItemKind::WoodenShield,
        ]);
        let armor: Vec<&str> = inventory
            .items_of_category(ItemCategory::Armor)
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(armor, vec!["Iron Shield", "Wooden Shield"]);
        assert!(inventory.items_of_category(ItemCategory::Potion).is_empty());
    }

    #[test]
    fn test_best_of_category() {
        let inventory = inventory_of(&[
            ItemKind::Sword,
            ItemKind::SteelSword,
            ItemKind::WoodenShield,
        ]);
        assert_eq!(
            inventory.best_of_category(ItemCategory::Weapon).unwrap().name,
            "Steel Sword"
        );
        assert!(inventory.best_of_category(ItemCategory::Potion).is_none());
    }

    #[test]
    fn test_best_of_category_tie_goes_to_first() {
        let mut inventory = Inventory::new();
        let mut first = ItemKind::Sword.template();
        first.name = "Old Sword".to_string();
        inventory.add(first);
        inventory.add(ItemKind::Sword.template());

        let best = inventory.best_of_category(ItemCategory::Weapon).unwrap();
        assert_eq!(best.name, "Old Sword");
    }

    #[test]
    fn test_qualifying_loadout() {
        assert!(!inventory_of(&[ItemKind::SteelSword]).has_qualifying_loadout());
        assert!(!inventory_of(&[ItemKind::Sword, ItemKind::IronShield]).has_qualifying_loadout());
        assert!(inventory_of(&[ItemKind::WoodenShield, ItemKind::SteelSword]).has_qualifying_loadout());
    }

    #[test]
    fn test_qualifying_loadout_checks_name_not_power() {
        let mut inventory = Inventory::new();
        let mut big_sword = ItemKind::Sword.template();
        big_sword.power = 50;
        inventory.add(big_sword);
        inventory.add(ItemKind::IronShield.template());
        assert!(!inventory.has_qualifying_loadout());
    }
}
