//! Item definitions
//!
//! Item categories, the shared item schema and the fixed catalog.

use serde::{Deserialize, Serialize};

/// Name the dragon's lair checks for when deciding if the player is ready
pub const QUALIFYING_WEAPON: &str = "Steel Sword";

/// Main item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Heals by `power` when used
    Potion,
    /// Deals `power` damage per strike
    Weapon,
    /// Reduces incoming damage by `power`
    Armor,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Potion => "Potion",
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
        }
    }

    /// Check if this is an equipment category
    pub fn is_equipment(&self) -> bool {
        matches!(self, ItemCategory::Weapon | ItemCategory::Armor)
    }
}

/// An owned item. Every acquisition clones a fresh value from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, unique per template
    pub name: String,
    pub category: ItemCategory,
    /// Price in gold
    pub cost: u32,
    /// Heal amount, damage or damage reduction depending on category
    pub power: i32,
    pub description: String,
}

impl Item {
    pub fn new(name: &str, category: ItemCategory, cost: u32, power: i32, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            cost,
            power,
            description: description.to_string(),
        }
    }

    pub fn is_potion(&self) -> bool {
        self.category == ItemCategory::Potion
    }

    pub fn is_weapon(&self) -> bool {
        self.category == ItemCategory::Weapon
    }

    pub fn is_armor(&self) -> bool {
        self.category == ItemCategory::Armor
    }
}

/// Every item the shops can sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    HealthPotion,
    Sword,
    SteelSword,
    WoodenShield,
    IronShield,
}

impl ItemKind {
    /// Build a fresh copy of the catalog template
    pub fn template(&self) -> Item {
        match self {
            ItemKind::HealthPotion => templates::health_potion(),
            ItemKind::Sword => templates::sword(),
            ItemKind::SteelSword => templates::steel_sword(),
            ItemKind::WoodenShield => templates::wooden_shield(),
            ItemKind::IronShield => templates::iron_shield(),
        }
    }

    /// Lowercase name used in shop menus
    pub fn menu_name(&self) -> &'static str {
        match self {
            ItemKind::HealthPotion => "health potion",
            ItemKind::Sword => "sword",
            ItemKind::SteelSword => "steel sword",
            ItemKind::WoodenShield => "wooden shield",
            ItemKind::IronShield => "iron shield",
        }
    }

    pub fn all() -> &'static [ItemKind] {
        &[
            ItemKind::HealthPotion,
            ItemKind::Sword,
            ItemKind::SteelSword,
            ItemKind::WoodenShield,
            ItemKind::IronShield,
        ]
    }
}

/// Item templates for the catalog
pub mod templates {
    use super::*;

    pub fn health_potion() -> Item {
        Item::new(
            "Health Potion",
            ItemCategory::Potion,
            5,
            30,
            "Restores 30 health points",
        )
    }

    pub fn sword() -> Item {
        Item::new("Sword", ItemCategory::Weapon, 10, 10, "A sturdy blade for combat")
    }

    pub fn steel_sword() -> Item {
        Item::new(
            QUALIFYING_WEAPON,
            ItemCategory::Weapon,
            25,
            20,
            "A sharp steel sword, more powerful than basic swords",
        )
    }

    pub fn wooden_shield() -> Item {
        Item::new(
            "Wooden Shield",
            ItemCategory::Armor,
            8,
            5,
            "Reduces damage taken in combat",
        )
    }

    pub fn iron_shield() -> Item {
        Item::new(
            "Iron Shield",
            ItemCategory::Armor,
            20,
            10,
            "A sturdy iron shield, better protection than wooden shield",
        )
    }
}
