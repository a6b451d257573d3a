//! Locations and travel
//!
//! The village is the hub. Every other location connects only to the village,
//! and the dragon's lair additionally requires a qualifying loadout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::Player;

/// All locations in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Village,
    Blacksmith,
    Market,
    Forest,
    DragonsLair,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TravelError {
    #[error("there is no road from the {} to the {}", .from.name(), .to.name())]
    NoRoute { from: Location, to: Location },
    #[error("You are not well-equipped enough to face the dragon yet! Get a steel sword and armor first.")]
    Unprepared,
}

impl Location {
    pub fn name(&self) -> &'static str {
        match self {
            Location::Village => "village",
            Location::Blacksmith => "blacksmith",
            Location::Market => "market",
            Location::Forest => "forest",
            Location::DragonsLair => "dragon's lair",
        }
    }

    /// Heading shown above the location menu
    pub fn title(&self) -> String {
        self.name().to_uppercase()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Location::Village => {
                "You're in a bustling village. The blacksmith and market are nearby."
            }
            Location::Blacksmith => {
                "The heat from the forge fills the air. Weapons and armor line the walls."
            }
            Location::Market => {
                "Merchants sell their wares from colorful stalls. A potion seller catches your eye."
            }
            Location::Forest => {
                "The forest is dark and foreboding. You hear strange noises all around you."
            }
            Location::DragonsLair => {
                "You stand in the dragon's lair, the air thick with smoke and danger."
            }
        }
    }

    pub fn is_hub(&self) -> bool {
        matches!(self, Location::Village)
    }

    /// Whether a road exists, ignoring equipment requirements
    pub fn connects_to(&self, to: Location) -> bool {
        *self != to && (self.is_hub() || to.is_hub())
    }

    /// Message shown when arriving here from the village
    pub fn arrival_message(&self) -> &'static str {
        match self {
            Location::Village => "You return to the village center.",
            Location::Blacksmith => "You enter the blacksmith's shop.",
            Location::Market => "You enter the market.",
            Location::Forest => "You venture into the forest...",
            Location::DragonsLair => "You bravely enter the dragon's lair...",
        }
    }

    /// Message shown when leaving here for the village
    pub fn return_message(&self) -> &'static str {
        match self {
            Location::Forest => "You hurry back to the safety of the village.",
            Location::DragonsLair => "You flee back to the village.",
            _ => "You return to the village center.",
        }
    }

    pub fn all() -> &'static [Location] {
        &[
            Location::Village,
            Location::Blacksmith,
            Location::Market,
            Location::Forest,
            Location::DragonsLair,
        ]
    }
}

/// Move the player to `to`, returning the flavor message for the journey.
/// A refused move leaves the player where they are.
pub fn travel(player: &mut Player, to: Location) -> Result<&'static str, TravelError> {
    let from = player.location();
    if !from.connects_to(to) {
        return Err(TravelError::NoRoute { from, to });
    }
    if to == Location::DragonsLair && !player.inventory().has_qualifying_loadout() {
        return Err(TravelError::Unprepared);
    }

    player.set_location(to);
    log::info!("{} travelled {:?} -> {:?}", player.name(), from, to);
    if to.is_hub() {
        Ok(from.return_message())
    } else {
        Ok(to.arrival_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameRules;
    use crate::items::ItemKind;

    fn player() -> Player {
        Player::new("Wanderer", &GameRules::default())
    }

    #[test]
    fn test_hub_edges() {
        for &a in Location::all() {
            for &b in Location::all() {
                let expected = a != b && (a == Location::Village || b == Location::Village);
                assert_eq!(a.connects_to(b), expected, "{:?} -> {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_round_trip_through_village() {
        let mut p = player();
        assert_eq!(travel(&mut p, Location::Forest), Ok("You venture into the forest..."));
        assert_eq!(p.location(), Location::Forest);
        assert_eq!(
            travel(&mut p, Location::Market),
            Err(TravelError::NoRoute { from: Location::Forest, to: Location::Market })
        );
        assert_eq!(p.location(), Location::Forest);
        assert_eq!(
            travel(&mut p, Location::Village),
            Ok("You hurry back to the safety of the village.")
        );
        assert_eq!(p.location(), Location::Village);
    }

    #[test]
    fn test_lair_requires_loadout() {
        let mut p = player();
        p.inventory_mut().add(ItemKind::SteelSword.template());
        assert_eq!(travel(&mut p, Location::DragonsLair), Err(TravelError::Unprepared));
        assert_eq!(p.location(), Location::Village);

        p.inventory_mut().add(ItemKind::WoodenShield.template());
        assert!(travel(&mut p, Location::DragonsLair).is_ok());
        assert_eq!(p.location(), Location::DragonsLair);
        assert_eq!(travel(&mut p, Location::Village), Ok("You flee back to the village."));
    }
}
