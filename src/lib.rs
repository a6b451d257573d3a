//! The Dragon's Quest - a turn-based text adventure
//!
//! Buy gear in the village, prove yourself in the forest,
//! and slay the dragon in its lair.

pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod items;
pub mod ui;
pub mod data;

// Re-export commonly used types
pub use game::{Game, GameState};
pub use data::GameRules;
pub use ui::{LineConsole, Session};
