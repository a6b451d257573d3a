//! Combat system

pub mod engine;
pub mod narration;

pub use engine::{damage_taken, resolve, CombatOutcome, CombatReport, Round};
pub use narration::{health_lines, narrate};
