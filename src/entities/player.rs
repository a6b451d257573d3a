//! Player state
//!
//! Name, health, gold, location and inventory for one session.

use serde::{Deserialize, Serialize};

use crate::data::GameRules;
use crate::items::Inventory;
use crate::world::Location;

/// How a health change ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthChange {
    /// Landed strictly inside the range
    Changed(i32),
    /// Saturated at the maximum
    Full(i32),
    /// Saturated at zero
    Depleted(i32),
}

impl HealthChange {
    pub fn value(&self) -> i32 {
        match *self {
            HealthChange::Changed(h) | HealthChange::Full(h) | HealthChange::Depleted(h) => h,
        }
    }
}

/// The adventurer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: i32,
    max_health: i32,
    gold: u32,
    location: Location,
    inventory: Inventory,
}

impl Player {
    /// Create a fresh player in the village
    pub fn new(name: impl Into<String>, rules: &GameRules) -> Self {
        Self {
            name: name.into(),
            health: rules.starting_health.min(rules.max_health).max(0),
            max_health: rules.max_health,
            gold: rules.starting_gold,
            location: Location::Village,
            inventory: Inventory::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply a heal (positive) or damage (negative), clamped to [0, max]
    pub fn change_health(&mut self, amount: i32) -> HealthChange {
        let raw = self.health.saturating_add(amount);
        if raw > self.max_health {
            self.health = self.max_health;
            HealthChange::Full(self.health)
        } else if raw <= 0 {
            self.health = 0;
            HealthChange::Depleted(0)
        } else {
            self.health = raw;
            HealthChange::Changed(raw)
        }
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Spend gold, returns false if not enough
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            true
        } else {
            false
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}
