//! Numeric game rules
//!
//! Every balance constant lives here so a RON file can override it.

use serde::{Deserialize, Serialize};

use super::loader::DataError;

/// Health and attack for one monster archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub health: i32,
    pub attack: i32,
}

/// Rule constants for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Health ceiling; heals saturate here
    pub max_health: i32,
    pub starting_health: i32,
    pub starting_gold: u32,
    /// Health lost when fighting without a weapon
    pub unarmed_penalty: i32,
    /// Gold found after every won fight
    pub victory_reward: u32,
    /// Armor can never reduce a hit below this
    pub min_damage: i32,
    pub monster: MonsterStats,
    pub boss: MonsterStats,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_health: 100,
            starting_health: 100,
            starting_gold: 20,
            unarmed_penalty: 20,
            victory_reward: 10,
            min_damage: 1,
            monster: MonsterStats { health: 20, attack: 10 },
            boss: MonsterStats { health: 50, attack: 20 },
        }
    }
}

impl GameRules {
    /// Reject rules that would break health bounds or stall combat
    pub fn validate(&self) -> Result<(), DataError> {
        let invalid = |msg: String| Err(DataError::Invalid(msg));
        if self.max_health < 1 {
            return invalid(format!("max_health must be at least 1, got {}", self.max_health));
        }
        if !(0..=self.max_health).contains(&self.starting_health) {
            return invalid(format!(
                "starting_health must be between 0 and {}, got {}",
                self.max_health, self.starting_health
            ));
        }
        if self.unarmed_penalty < 0 {
            return invalid(format!(
                "unarmed_penalty must not be negative, got {}",
                self.unarmed_penalty
            ));
        }
        if self.min_damage < 1 {
            return invalid(format!("min_damage must be at least 1, got {}", self.min_damage));
        }
        for (label, stats) in [("monster", self.monster), ("boss", self.boss)] {
            if stats.health < 1 || stats.attack < 1 {
                return invalid(format!(
                    "{} health and attack must be positive, got {}/{}",
                    label, stats.health, stats.attack
                ));
            }
        }
        Ok(())
    }
}
