//! Game module - Core game logic and state management

mod state;
mod menu;

pub use state::{Game, GameState, GameMessage, MessageCategory, Prompt};
pub use menu::{action_for, actions, Action};
