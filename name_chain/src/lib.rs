//! # Name Chain
//!
//! A two-player word-chain game played with a fixed dictionary of five-letter
//! names. Players take turns submitting a name; every name after the first
//! has to start with the last letter of the previous one, and no name may be
//! played twice.
//!
//! ## Architecture
//!
//! - [`game`]: the engine. Pure functions from a [`GameState`] and a
//!   submitted name to the next state.
//! - [`store`]: [`SessionStore`] trait with in-memory and PostgreSQL
//!   implementations.
//! - [`service`]: [`GameService`], which loads a session's state, runs the
//!   engine and saves the result.
//! - [`db`]: PostgreSQL connection pooling.
//!
//! ## Example
//!
//! ```
//! use name_chain::{Dictionary, Player, apply_move, restart};
//!
//! let dictionary = Dictionary::standard();
//! let first = apply_move(dictionary, &restart(), "Arjun");
//! assert!(first.accepted());
//! assert_eq!(first.state.current_player, Player::Player2);
//!
//! let second = apply_move(dictionary, &first.state, "Priya");
//! assert!(!second.accepted());
//! assert_eq!(second.message(), "Name must start with 'n' (the last letter of 'Arjun')!");
//! ```

/// Game rules, state and dictionary.
pub mod game;
pub use game::{
    Dictionary, GamePhase, GameState, MoveOutcome, MoveRejection, Player, UsedNames, apply_move,
    restart, validate_move,
};

/// Database connection pooling.
pub mod db;

/// Session-keyed persistence of game states.
pub mod store;
pub use store::{MemoryStore, PgSessionStore, SessionId, SessionStore, StoreError, StoreResult};

pub mod service;
pub use service::GameService;
