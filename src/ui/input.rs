//! Input parsing
//!
//! Turns raw console lines into validated menu and item choices.

use std::num::IntErrorKind;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a number!")]
    Empty,
    #[error("That's not a number!")]
    NotANumber,
    #[error("Please enter a number between 1 and {max}.")]
    OutOfRange { max: usize },
}

/// Parse a 1-based menu choice in `1..=max`
pub fn parse_choice(input: &str, max: usize) -> Result<usize, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let number: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange { max },
        _ => InputError::NotANumber,
    })?;
    match usize::try_from(number) {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(InputError::OutOfRange { max }),
    }
}

/// Answer to the "use which item?" prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSelection {
    Cancel,
    /// 0-based inventory position
    Index(usize),
    Invalid,
}

/// Parse an item prompt answer: a 1-based number or "cancel"
pub fn parse_item_selection(input: &str, len: usize) -> ItemSelection {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("cancel") {
        return ItemSelection::Cancel;
    }
    match parse_choice(trimmed, len) {
        Ok(n) => ItemSelection::Index(n - 1),
        Err(_) => ItemSelection::Invalid,
    }
}
