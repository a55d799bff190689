//! Game constants.

/// Every playable name is exactly this many characters long.
pub const NAME_LENGTH: usize = 5;

pub const FIRST_MOVE_PROMPT: &str = "Player 1, enter the first name to start the game!";
