//! Game rules and their external RON source
//!
//! Rules can be overridden from a RON file; everything falls back to the
//! built-in defaults.

pub mod loader;
pub mod rules;

pub use loader::{export_default_rules, DataError, DEFAULT_RULES_PATH};
pub use rules::{GameRules, MonsterStats};
