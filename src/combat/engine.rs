//! Combat resolution
//!
//! Fights are fully deterministic: the player strikes first every round with
//! their best weapon, and the monster answers unless it has already fallen.

use crate::data::GameRules;
use crate::entities::{Archetype, Monster, Player};
use crate::items::{Item, ItemCategory};

/// How a fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// Monster slain, reward paid
    Victory,
    /// Player health reached zero
    Defeat,
    /// No weapon; the unarmed penalty was applied
    Retreated,
    /// Boss refused for lack of a qualifying loadout; nothing changed
    Unprepared,
}

impl CombatOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, CombatOutcome::Victory)
    }
}

/// One exchange of blows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub damage_dealt: i32,
    pub monster_health: i32,
    /// Raw attack of the monster, before armor
    pub monster_attack: i32,
    /// `None` when the monster fell before it could answer
    pub damage_taken: Option<i32>,
    pub player_health: i32,
}

/// Everything that happened in a fight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    pub archetype: Archetype,
    pub outcome: CombatOutcome,
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    /// Health removed by the unarmed penalty, if it applied
    pub penalty: Option<i32>,
    pub rounds: Vec<Round>,
    pub gold_reward: u32,
}

impl CombatReport {
    fn aborted(archetype: Archetype, outcome: CombatOutcome) -> Self {
        Self {
            archetype,
            outcome,
            weapon: None,
            armor: None,
            penalty: None,
            rounds: Vec::new(),
            gold_reward: 0,
        }
    }
}

/// Damage a monster deals through the given armor
pub fn damage_taken(attack: i32, armor: Option<&Item>, min_damage: i32) -> i32 {
    let reduction = armor.map(|a| a.power).unwrap_or(0);
    (attack - reduction).max(min_damage)
}

/// Resolve a fight between the player and a fresh monster of `archetype`
pub fn resolve(player: &mut Player, archetype: Archetype, rules: &GameRules) -> CombatReport {
    let Some(weapon) = player.inventory().best_of_category(ItemCategory::Weapon).cloned() else {
        player.change_health(-rules.unarmed_penalty);
        log::info!("{} retreated without a weapon", player.name());
        let mut report = CombatReport::aborted(archetype, CombatOutcome::Retreated);
        report.penalty = Some(rules.unarmed_penalty);
        return report;
    };

    if archetype.is_boss() && !player.inventory().has_qualifying_loadout() {
        log::info!("{} is not equipped to face the {}", player.name(), archetype.name());
        return CombatReport::aborted(archetype, CombatOutcome::Unprepared);
    }

    let armor = player.inventory().best_of_category(ItemCategory::Armor).cloned();
    let mut monster = Monster::spawn(archetype, rules);
    let mut rounds = Vec::new();

    while player.is_alive() && !monster.is_dead() {
        let monster_health = monster.take_damage(weapon.power);
        let taken = if monster.is_dead() {
            None
        } else {
            let damage = damage_taken(monster.attack, armor.as_ref(), rules.min_damage);
            player.change_health(-damage);
            Some(damage)
        };
        let round = Round {
            damage_dealt: weapon.power,
            monster_health,
            monster_attack: monster.attack,
            damage_taken: taken,
            player_health: player.health(),
        };
        log::debug!("Round {}: {:?}", rounds.len() + 1, round);
        rounds.push(round);
    }

    let (outcome, gold_reward) = if player.is_alive() {
        player.add_gold(rules.victory_reward);
        (CombatOutcome::Victory, rules.victory_reward)
    } else {
        (CombatOutcome::Defeat, 0)
    };
    log::info!(
        "{} vs {}: {:?} after {} rounds (health {})",
        player.name(),
        monster.name(),
        outcome,
        rounds.len(),
        player.health()
    );

    CombatReport {
        archetype,
        outcome,
        weapon: Some(weapon),
        armor,
        penalty: None,
        rounds,
        gold_reward,
    }
}
