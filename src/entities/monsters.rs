//! Monster archetypes
//!
//! Monsters only exist for the duration of a single fight.

use serde::{Deserialize, Serialize};

use crate::data::GameRules;

/// Combat opponent class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Forest monster
    Normal,
    /// The dragon
    Boss,
}

impl Archetype {
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Normal => "Monster",
            Archetype::Boss => "Dragon",
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self, Archetype::Boss)
    }
}

/// A live opponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub archetype: Archetype,
    pub health: i32,
    pub attack: i32,
}

impl Monster {
    /// Spawn a monster with the fixed stats of its archetype
    pub fn spawn(archetype: Archetype, rules: &GameRules) -> Self {
        let stats = match archetype {
            Archetype::Normal => rules.monster,
            Archetype::Boss => rules.boss,
        };
        Self {
            archetype,
            health: stats.health,
            attack: stats.attack,
        }
    }

    pub fn name(&self) -> &'static str {
        self.archetype.name()
    }

    /// Apply a strike; health never drops below zero
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_stats() {
        let rules = GameRules::default();
        let monster = Monster::spawn(Archetype::Normal, &rules);
        assert_eq!((monster.health, monster.attack), (20, 10));
        let dragon = Monster::spawn(Archetype::Boss, &rules);
        assert_eq!((dragon.health, dragon.attack), (50, 20));
        assert_eq!(dragon.name(), "Dragon");
    }

    #[test]
    fn test_take_damage_clamps() {
        let mut monster = Monster::spawn(Archetype::Normal, &GameRules::default());
        assert_eq!(monster.take_damage(15), 5);
        assert_eq!(monster.take_damage(15), 0);
        assert!(monster.is_dead());
    }
}
