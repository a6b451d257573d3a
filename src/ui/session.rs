//! Interactive session
//!
//! The outer loop: show the current menu, read a valid choice, dispatch it,
//! print the results. Runs until the player quits, slays the dragon, or
//! input runs out.

use anyhow::Result;

use crate::data::GameRules;
use crate::game::{action_for, actions, Game, MessageCategory, Prompt};
use crate::world::Location;

use super::console::Console;
use super::input::{parse_choice, parse_item_selection};

/// Drives one game over a console
pub struct Session<C: Console> {
    console: C,
    rules: GameRules,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, rules: GameRules) -> Self {
        Self { console, rules }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Play a full session, returning the finished game
    pub fn run(&mut self) -> Result<Game> {
        self.show_title()?;
        let name = self
            .console
            .read_line("\nWhat is your name, brave adventurer? ")?
            .unwrap_or_default();
        let mut game = Game::new(name, self.rules.clone());
        self.console
            .write_line(&format!("\nWelcome, {}!", game.player().name()))?;
        self.console
            .write_line(&format!("You start with {} gold.", game.player().gold()))?;

        while game.is_running() {
            self.show_location(game.location())?;
            let Some(choice) = self.read_choice(game.location())? else {
                log::info!("Input closed, ending session");
                game.quit();
                self.flush_messages(&mut game)?;
                break;
            };
            let Some(action) = action_for(game.location(), choice) else {
                continue;
            };
            let prompt = game.perform(action);
            self.flush_messages(&mut game)?;

            if prompt == Some(Prompt::ChooseItem) {
                let answer = self
                    .console
                    .read_line("Use which item? (number or 'cancel'): ")?
                    .unwrap_or_default();
                let selection = parse_item_selection(&answer, game.player().inventory().len());
                game.use_item(selection);
                self.flush_messages(&mut game)?;
            }
        }

        log::info!(
            "Session over for '{}': {:?} (health {}, gold {})",
            game.player().name(),
            game.state(),
            game.player().health(),
            game.player().gold()
        );
        Ok(game)
    }

    fn show_title(&mut self) -> Result<()> {
        for line in [
            "=================================",
            "       The Dragon's Quest        ",
            "=================================",
            "\nYour quest: Defeat the dragon in the mountains!",
        ] {
            self.console.write_line(line)?;
        }
        Ok(())
    }

    fn show_location(&mut self, location: Location) -> Result<()> {
        self.console
            .write_line(&format!("\n=== {} ===", location.title()))?;
        self.console.write_line(location.description())?;
        self.console.write_line("\nWhat would you like to do?")?;
        for (i, action) in actions(location).iter().enumerate() {
            self.console
                .write_line(&format!("{}: {}", i + 1, action.label(location)))?;
        }
        Ok(())
    }

    /// Keep asking until the answer is a valid choice; `None` once input closes
    fn read_choice(&mut self, location: Location) -> Result<Option<usize>> {
        let max = actions(location).len();
        loop {
            let Some(input) = self.console.read_line("\nEnter choice (number): ")? else {
                return Ok(None);
            };
            match parse_choice(&input, max) {
                Ok(choice) => return Ok(Some(choice)),
                Err(e) => {
                    log::debug!("Rejected input {:?}: {}", input, e);
                    self.console.write_line(&format!("\nError: {}", e))?;
                    self.console.write_line("Please try again!")?;
                }
            }
        }
    }

    /// Print queued messages; combat and warning blocks get a blank line before them
    fn flush_messages(&mut self, game: &mut Game) -> Result<()> {
        let mut previous = None;
        for message in game.take_messages() {
            let set_apart = matches!(
                message.category,
                MessageCategory::Combat | MessageCategory::Warning
            );
            if set_apart && previous != Some(message.category) {
                self.console.write_line("")?;
            }
            previous = Some(message.category);
            self.console.write_line(&message.text)?;
        }
        Ok(())
    }
}
