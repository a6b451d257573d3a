//! Location menus
//!
//! Each location offers a fixed, numbered list of actions.

use crate::items::{ItemKind, Shop};
use crate::world::Location;

/// Something the player can choose from a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Travel(Location),
    Buy(Shop, ItemKind),
    Fight,
    CheckStatus,
    UseItem,
    Help,
    Quit,
}

impl Action {
    /// Menu label, relative to the location it is offered in
    pub fn label(&self, at: Location) -> String {
        match self {
            Action::Travel(Location::Blacksmith) => "Go to blacksmith".to_string(),
            Action::Travel(Location::Market) => "Go to market".to_string(),
            Action::Travel(Location::Forest) => "Enter forest".to_string(),
            Action::Travel(Location::DragonsLair) => {
                "Attempt dragon's lair (Requires steel sword + armor)".to_string()
            }
            Action::Travel(Location::Village) => match at {
                Location::DragonsLair => "Flee to village".to_string(),
                _ => "Return to village".to_string(),
            },
            Action::Buy(_, kind) => {
                format!("Buy {} ({} gold)", kind.menu_name(), kind.template().cost)
            }
            Action::Fight => match at {
                Location::DragonsLair => "Fight the dragon".to_string(),
                _ => "Fight a monster".to_string(),
            },
            Action::CheckStatus => "Check status".to_string(),
            Action::UseItem => "Use item".to_string(),
            Action::Help => "Help".to_string(),
            Action::Quit => "Quit game".to_string(),
        }
    }
}

const VILLAGE: &[Action] = &[
    Action::Travel(Location::Blacksmith),
    Action::Travel(Location::Market),
    Action::Travel(Location::Forest),
    Action::Travel(Location::DragonsLair),
    Action::CheckStatus,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

const BLACKSMITH: &[Action] = &[
    Action::Buy(Shop::Blacksmith, ItemKind::Sword),
    Action::Buy(Shop::Blacksmith, ItemKind::SteelSword),
    Action::Buy(Shop::Blacksmith, ItemKind::WoodenShield),
    Action::Buy(Shop::Blacksmith, ItemKind::IronShield),
    Action::Travel(Location::Village),
    Action::CheckStatus,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

const MARKET: &[Action] = &[
    Action::Buy(Shop::Market, ItemKind::HealthPotion),
    Action::Travel(Location::Village),
    Action::CheckStatus,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

const BATTLEGROUND: &[Action] = &[
    Action::Fight,
    Action::Travel(Location::Village),
    Action::CheckStatus,
    Action::UseItem,
    Action::Help,
    Action::Quit,
];

/// Actions offered at a location, in menu order
pub fn actions(location: Location) -> &'static [Action] {
    match location {
        Location::Village => VILLAGE,
        Location::Blacksmith => BLACKSMITH,
        Location::Market => MARKET,
        Location::Forest | Location::DragonsLair => BATTLEGROUND,
    }
}

/// Look up a 1-based menu choice
pub fn action_for(location: Location, choice: usize) -> Option<Action> {
    choice
        .checked_sub(1)
        .and_then(|i| actions(location).get(i))
        .copied()
}
