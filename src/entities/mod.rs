//! Player and monster state

pub mod player;
pub mod monsters;

pub use player::{HealthChange, Player};
pub use monsters::{Archetype, Monster};
