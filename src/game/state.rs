//! Game state machine
//!
//! Owns the player for the whole session and applies menu actions to it.
//! Nothing here prints: every operation records messages which the session
//! drains and writes to the console.

use crate::combat::{health_lines, narrate, resolve, CombatOutcome};
use crate::data::GameRules;
use crate::entities::{Archetype, HealthChange, Player};
use crate::items::{ItemCategory, ItemKind, Shop, ShopError};
use crate::ui::ItemSelection;
use crate::world::{travel, Location, TravelError};

use super::menu::Action;

/// The main game struct that holds all session data
#[derive(Debug, Clone)]
pub struct Game {
    /// Current game state
    state: GameState,
    player: Player,
    rules: GameRules,
    /// Pending output, oldest first
    messages: Vec<GameMessage>,
}

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Actively playing
    Playing,
    /// Player chose to quit (or input ran out)
    Quit,
    /// Dragon slain
    Victory,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// Follow-up input an action needs before it can finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Pick an inventory item by number, or cancel
    ChooseItem,
}

/// A message to display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMessage {
    pub text: String,
    pub category: MessageCategory,
}

/// Categories for message filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Item,
    Travel,
    System,
    Warning,
}

impl Game {
    /// Start a new session for `name`
    pub fn new(name: impl Into<String>, rules: GameRules) -> Self {
        let player = Player::new(name, &rules);
        log::info!(
            "New session for '{}' ({} health, {} gold)",
            player.name(),
            player.health(),
            player.gold()
        );
        Self {
            state: GameState::Playing,
            player,
            rules,
            messages: Vec::new(),
        }
    }

    /// Get the current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_terminal()
    }

    /// Set a new game state
    pub fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn location(&self) -> Location {
        self.player.location()
    }

    /// Add a message to the log
    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.messages.push(GameMessage {
            text: text.into(),
            category,
        });
    }

    fn add_lines(&mut self, lines: Vec<String>, category: MessageCategory) {
        for line in lines {
            self.add_message(line, category);
        }
    }

    /// Take all pending messages
    pub fn take_messages(&mut self) -> Vec<GameMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Carry out a menu action. Returns a prompt when the action needs more input.
    pub fn perform(&mut self, action: Action) -> Option<Prompt> {
        log::debug!("Action {:?} at {:?}", action, self.location());
        match action {
            Action::Travel(to) => self.travel(to),
            Action::Buy(shop, kind) => self.buy(shop, kind),
            Action::Fight => self.fight(),
            Action::CheckStatus => self.show_status(),
            Action::UseItem => return self.begin_use_item(),
            Action::Help => self.show_help(),
            Action::Quit => self.quit(),
        }
        None
    }

    pub fn travel(&mut self, to: Location) {
        match travel(&mut self.player, to) {
            Ok(message) => self.add_message(message, MessageCategory::Travel),
            Err(e @ TravelError::Unprepared) => {
                log::info!("Refused entry to {:?}", to);
                self.add_message(e.to_string(), MessageCategory::Warning);
            }
            Err(e) => {
                log::warn!("Invalid travel request: {}", e);
                self.add_message(e.to_string(), MessageCategory::Warning);
            }
        }
    }

    pub fn buy(&mut self, shop: Shop, kind: ItemKind) {
        match shop.sell(kind, &mut self.player) {
            Ok(item) => {
                self.add_message(shop.sale_line(&item), MessageCategory::Item);
                self.add_message(
                    format!("You bought a {} for {} gold!", item.name, item.cost),
                    MessageCategory::Item,
                );
                let gold = self.player.gold();
                self.add_message(format!("Gold remaining: {}", gold), MessageCategory::Item);
            }
            Err(ShopError::InsufficientGold { .. }) => {
                self.add_message(shop.refusal_line(), MessageCategory::Warning);
            }
            Err(e) => self.add_message(e.to_string(), MessageCategory::Warning),
        }
    }

    /// Fight whatever lives at the current location
    pub fn fight(&mut self) {
        let location = self.location();
        let archetype = match location {
            Location::Forest => Archetype::Normal,
            Location::DragonsLair => Archetype::Boss,
            _ => {
                self.add_message("There is nothing to fight here.", MessageCategory::Warning);
                return;
            }
        };

        let report = resolve(&mut self.player, archetype, &self.rules);
        self.add_lines(narrate(&report), MessageCategory::Combat);
        if report.penalty.is_some() {
            let health = self.player.health();
            let change = if health <= 0 {
                HealthChange::Depleted(0)
            } else {
                HealthChange::Changed(health)
            };
            self.add_lines(health_lines(change), MessageCategory::Combat);
        }

        if report.outcome == CombatOutcome::Victory {
            if archetype.is_boss() {
                self.show_victory();
                self.set_state(GameState::Victory);
            }
            return;
        }

        // Losing is survivable: with health left the player limps home,
        // at zero health they stay put and the session goes on.
        if self.player.is_alive() {
            if archetype.is_boss() {
                self.add_message("You barely escaped with your life!", MessageCategory::Combat);
            }
            self.player.set_location(Location::Village);
            log::info!("{} returned to the village after {:?}", self.player.name(), report.outcome);
        }
    }

    fn begin_use_item(&mut self) -> Option<Prompt> {
        if self.player.inventory().is_empty() {
            self.add_message("You have no items!", MessageCategory::Item);
            return None;
        }
        self.add_message("=== Inventory ===", MessageCategory::Item);
        let lines: Vec<String> = self
            .player
            .inventory()
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item.name))
            .collect();
        self.add_lines(lines, MessageCategory::Item);
        Some(Prompt::ChooseItem)
    }

    /// Finish a use-item action with the player's selection
    pub fn use_item(&mut self, selection: ItemSelection) {
        let index = match selection {
            ItemSelection::Cancel => return,
            ItemSelection::Index(index) => index,
            ItemSelection::Invalid => {
                self.add_message("Invalid item number!", MessageCategory::Warning);
                return;
            }
        };
        let Some(item) = self.player.inventory().get(index).cloned() else {
            self.add_message("Invalid item number!", MessageCategory::Warning);
            return;
        };

        match item.category {
            ItemCategory::Potion => {
                if let Err(e) = self.player.inventory_mut().remove_at(index) {
                    self.add_message(e.to_string(), MessageCategory::Warning);
                    return;
                }
                self.add_message(format!("You drink the {}.", item.name), MessageCategory::Item);
                let change = self.player.change_health(item.power);
                self.add_lines(health_lines(change), MessageCategory::Item);
                self.add_message(
                    format!("Health restored to: {}", change.value()),
                    MessageCategory::Item,
                );
                log::info!("{} drank {} (health {})", self.player.name(), item.name, change.value());
            }
            ItemCategory::Weapon | ItemCategory::Armor => {
                self.add_message(
                    format!("You ready your {} for battle.", item.name),
                    MessageCategory::Item,
                );
            }
        }
    }

    pub fn show_status(&mut self) {
        let mut lines = vec![
            format!("=== {}'s Status ===", self.player.name()),
            format!("Health: {}", self.player.health()),
            format!("Gold: {}", self.player.gold()),
            format!("Location: {}", self.player.location().name()),
            "Inventory:".to_string(),
        ];
        if self.player.inventory().is_empty() {
            lines.push("   Nothing in inventory".to_string());
        } else {
            lines.extend(
                self.player
                    .inventory()
                    .iter()
                    .enumerate()
                    .map(|(i, item)| format!("   {}. {} - {}", i + 1, item.name, item.description)),
            );
        }
        self.add_lines(lines, MessageCategory::System);
    }

    pub fn show_help(&mut self) {
        let lines = [
            "=== AVAILABLE COMMANDS ===",
            "Navigate locations and buy equipment to prepare for battles.",
            "Use items like potions to heal.",
            "Defeat monsters and ultimately the dragon to win!",
            "Use numbered choices to make selections.",
            "Good luck on your quest, brave adventurer!",
        ];
        for line in lines {
            self.add_message(line, MessageCategory::System);
        }
    }

    fn show_victory(&mut self) {
        let lines = vec![
            "=== VICTORY! ===".to_string(),
            "You have slain the dragon and saved the kingdom!".to_string(),
            format!("Final stats for {}:", self.player.name()),
            format!("Health: {}", self.player.health()),
            format!("Gold: {}", self.player.gold()),
            "Thank you for playing The Dragon's Quest!".to_string(),
        ];
        self.add_lines(lines, MessageCategory::System);
    }

    pub fn quit(&mut self) {
        self.add_message("Thanks for playing!", MessageCategory::System);
        self.set_state(GameState::Quit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new("Rowan", GameRules::default())
    }

    fn texts(game: &mut Game) -> Vec<String> {
        game.take_messages().into_iter().map(|m| m.text).collect()
    }

    fn give(game: &mut Game, kinds: &[ItemKind]) {
        for kind in kinds {
            game.player_mut().inventory_mut().add(kind.template());
        }
    }

    #[test]
    fn test_buy_and_refuse() {
        let mut g = game();
        g.perform(Action::Buy(Shop::Blacksmith, ItemKind::Sword));
        assert_eq!(
            texts(&mut g),
            vec![
                "Blacksmith: 'A fine Sword for a brave adventurer!'",
                "You bought a Sword for 10 gold!",
                "Gold remaining: 10",
            ]
        );
        g.perform(Action::Buy(Shop::Blacksmith, ItemKind::SteelSword));
        assert_eq!(texts(&mut g), vec!["Blacksmith: 'Come back when you have more gold!'"]);
        assert_eq!(g.player().gold(), 10);
        assert_eq!(g.player().inventory().len(), 1);
    }

    #[test]
    fn test_lair_gate_message() {
        let mut g = game();
        g.perform(Action::Travel(Location::DragonsLair));
        assert_eq!(g.location(), Location::Village);
        let messages = g.take_messages();
        assert_eq!(messages[0].category, MessageCategory::Warning);
        assert!(messages[0].text.starts_with("You are not well-equipped"));
    }

    #[test]
    fn test_forest_retreat_sends_player_home() {
        let mut g = game();
        g.perform(Action::Travel(Location::Forest));
        g.take_messages();
        g.perform(Action::Fight);
        assert_eq!(g.player().health(), 80);
        assert_eq!(g.location(), Location::Village);
        assert_eq!(
            texts(&mut g),
            vec!["Without a weapon, you must retreat!", "Health is now: 80"]
        );
        assert!(g.is_running());
    }

    #[test]
    fn test_forest_loss_at_zero_health_stays_put() {
        let mut g = game();
        g.player_mut().change_health(-100);
        g.perform(Action::Travel(Location::Forest));
        g.perform(Action::Fight);
        assert_eq!(g.player().health(), 0);
        assert_eq!(g.location(), Location::Forest);
        assert!(g.is_running());
    }

    #[test]
    fn test_forest_victory_stays_in_forest() {
        let mut g = game();
        give(&mut g, &[ItemKind::Sword]);
        g.perform(Action::Travel(Location::Forest));
        g.perform(Action::Fight);
        assert_eq!(g.location(), Location::Forest);
        assert_eq!(g.player().gold(), 30);
    }

    #[test]
    fn test_dragon_victory_ends_session() {
        let mut g = game();
        give(&mut g, &[ItemKind::SteelSword, ItemKind::IronShield]);
        g.perform(Action::Travel(Location::DragonsLair));
        g.perform(Action::Fight);
        assert_eq!(g.state(), GameState::Victory);
        let lines = texts(&mut g);
        assert!(lines.contains(&"=== VICTORY! ===".to_string()));
        assert!(lines.contains(&"Health: 80".to_string()));
        assert!(lines.contains(&"Gold: 30".to_string()));
    }

    #[test]
    fn test_dragon_defeat_at_zero_health_stays_in_lair() {
        let mut g = game();
        give(&mut g, &[ItemKind::SteelSword, ItemKind::WoodenShield]);
        g.perform(Action::Travel(Location::DragonsLair));
        // 15 damage per round and the dragon needs three strikes
        g.player_mut().change_health(-70);
        g.perform(Action::Fight);
        assert_eq!(g.player().health(), 0);
        assert_eq!(g.location(), Location::DragonsLair);
        assert_eq!(g.state(), GameState::Playing);
    }

    #[test]
    fn test_dragon_escape() {
        let mut g = game();
        give(&mut g, &[ItemKind::Sword]);
        g.player_mut().set_location(Location::DragonsLair);
        g.perform(Action::Fight);
        assert_eq!(g.state(), GameState::Playing);
        assert_eq!(g.player().health(), 100);
        assert_eq!(g.location(), Location::Village);
        assert!(texts(&mut g).contains(&"You barely escaped with your life!".to_string()));
    }

    #[test]
    fn test_use_potion() {
        let mut g = game();
        give(&mut g, &[ItemKind::Sword, ItemKind::HealthPotion]);
        g.player_mut().change_health(-50);

        assert_eq!(g.perform(Action::UseItem), Some(Prompt::ChooseItem));
        assert_eq!(
            texts(&mut g),
            vec!["=== Inventory ===", "1. Sword", "2. Health Potion"]
        );
        g.use_item(ItemSelection::Index(1));
        assert_eq!(g.player().health(), 80);
        assert_eq!(g.player().inventory().len(), 1);
        assert_eq!(
            texts(&mut g),
            vec!["You drink the Health Potion.", "Health is now: 80", "Health restored to: 80"]
        );
    }

    #[test]
    fn test_use_potion_at_full_health() {
        let mut g = game();
        give(&mut g, &[ItemKind::HealthPotion]);
        g.use_item(ItemSelection::Index(0));
        assert_eq!(g.player().health(), 100);
        assert!(g.player().inventory().is_empty());
        assert_eq!(texts(&mut g)[1], "You're at full health!");
    }

    #[test]
    fn test_use_equipment_and_bad_selection() {
        let mut g = game();
        give(&mut g, &[ItemKind::IronShield]);
        g.use_item(ItemSelection::Index(0));
        assert_eq!(texts(&mut g), vec!["You ready your Iron Shield for battle."]);
        g.use_item(ItemSelection::Index(4));
        assert_eq!(texts(&mut g), vec!["Invalid item number!"]);
        g.use_item(ItemSelection::Cancel);
        assert!(texts(&mut g).is_empty());
        assert_eq!(g.player().inventory().len(), 1);
    }

    #[test]
    fn test_use_item_with_empty_inventory() {
        let mut g = game();
        assert_eq!(g.perform(Action::UseItem), None);
        assert_eq!(texts(&mut g), vec!["You have no items!"]);
    }

    #[test]
    fn test_status() {
        let mut g = game();
        g.perform(Action::CheckStatus);
        assert_eq!(
            texts(&mut g),
            vec![
                "=== Rowan's Status ===",
                "Health: 100",
                "Gold: 20",
                "Location: village",
                "Inventory:",
                "   Nothing in inventory",
            ]
        );
    }

    #[test]
    fn test_quit() {
        let mut g = game();
        g.perform(Action::Quit);
        assert_eq!(g.state(), GameState::Quit);
        assert!(!g.is_running());
    }
}
