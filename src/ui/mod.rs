//! User Interface module
//!
//! Line-based console I/O, input parsing and the interactive session loop.

pub mod console;
pub mod input;
pub mod session;

pub use console::{Console, LineConsole};
pub use input::{parse_choice, parse_item_selection, InputError, ItemSelection};
pub use session::Session;
