//! Combat narration
//!
//! Turns a `CombatReport` into the lines the player reads.

use super::engine::{CombatOutcome, CombatReport};
use crate::entities::HealthChange;

/// Lines describing a single health change
pub fn health_lines(change: HealthChange) -> Vec<String> {
    let mut lines = Vec::new();
    match change {
        HealthChange::Full(_) => lines.push("You're at full health!".to_string()),
        HealthChange::Depleted(_) => lines.push("You're gravely wounded!".to_string()),
        HealthChange::Changed(_) => {}
    }
    lines.push(format!("Health is now: {}", change.value()));
    lines
}

/// Narrate a whole fight, blow by blow
pub fn narrate(report: &CombatReport) -> Vec<String> {
    let foe = report.archetype.name();
    let mut lines = Vec::new();

    match report.outcome {
        CombatOutcome::Retreated => {
            lines.push("Without a weapon, you must retreat!".to_string());
            return lines;
        }
        CombatOutcome::Unprepared => {
            lines.push(
                "You are not equipped well enough to face the dragon! Get a steel sword and armor first."
                    .to_string(),
            );
            return lines;
        }
        CombatOutcome::Victory | CombatOutcome::Defeat => {}
    }

    lines.push(format!("You enter combat against the {}!", foe));
    if let Some(weapon) = &report.weapon {
        lines.push(format!("You wield your {} (Damage: {})", weapon.name, weapon.power));
    }
    match &report.armor {
        Some(armor) => lines.push(format!(
            "You wear your {} (Protection: {})",
            armor.name, armor.power
        )),
        None => lines.push("You have no armor for protection.".to_string()),
    }

    for round in &report.rounds {
        lines.push(format!(
            "You strike the {} for {} damage. {} health: {}",
            foe, round.damage_dealt, foe, round.monster_health
        ));
        if let Some(taken) = round.damage_taken {
            if report.armor.is_some() {
                lines.push(format!(
                    "{} attacks you for {} damage, reduced by your armor to {} damage.",
                    foe, round.monster_attack, taken
                ));
            } else {
                lines.push(format!("{} attacks you for {} damage.", foe, taken));
            }
            let change = if round.player_health <= 0 {
                HealthChange::Depleted(0)
            } else {
                HealthChange::Changed(round.player_health)
            };
            lines.extend(health_lines(change));
        }
    }

    if report.outcome.is_victory() {
        lines.push(format!(
            "Victory! You defeated the {}! You found {} gold!",
            foe, report.gold_reward
        ));
    } else {
        lines.push(format!("You were defeated by the {}...", foe));
    }
    lines
}
