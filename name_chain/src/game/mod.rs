//! Name chain game engine.
//!
//! This module provides the rules of the game:
//! - The fixed dictionary of playable names
//! - The game state value handed between moves
//! - Pure move validation and transitions

pub mod constants;
pub mod dictionary;
pub mod engine;
pub mod state;

pub use dictionary::Dictionary;
pub use engine::{MoveOutcome, MoveRejection, apply_move, restart, validate_move};
pub use state::{GamePhase, GameState, Player, UsedNames};
