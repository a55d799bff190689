//! Move validation and state transitions.
//!
//! Both operations are pure: they take a state value and hand back a new
//! one. Loading and saving states is the caller's business.

use log::debug;
use thiserror::Error;

use super::{constants::NAME_LENGTH, dictionary::Dictionary, state::GameState};

/// Why a submitted name was turned down.
///
/// The display text is shown to players as-is.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MoveRejection {
    #[error("Please enter a name!")]
    EmptyName,
    #[error("Name must be exactly 5 letters long!")]
    WrongLength,
    #[error("Invalid name! Please enter a valid 5-letter Indian name.")]
    UnknownName,
    #[error("This name has already been used! Try a different name.")]
    AlreadyUsed,
    #[error("Name must start with '{required}' (the last letter of '{previous}')!")]
    BrokenChain { required: char, previous: String },
}

/// Result of submitting a name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveOutcome {
    /// State after the move. On rejection this is the input state with only
    /// `message` replaced.
    pub state: GameState,
    pub rejection: Option<MoveRejection>,
}

impl MoveOutcome {
    #[must_use]
    pub fn accepted(&self) -> bool {
        self.rejection.is_none()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.state.message
    }
}

fn same_letter(a: char, b: char) -> bool {
    a.eq_ignore_ascii_case(&b)
}

/// Run the rules against `candidate` without changing anything.
///
/// Returns the trimmed name if it may be played. Rules are checked in a fixed
/// order and the first one that fails is reported.
pub fn validate_move(
    dictionary: &Dictionary,
    state: &GameState,
    candidate: &str,
) -> Result<String, MoveRejection> {
    let name = candidate.trim();

    if name.is_empty() {
        return Err(MoveRejection::EmptyName);
    }

    if name.chars().count() != NAME_LENGTH {
        return Err(MoveRejection::WrongLength);
    }

    if !dictionary.contains(name) {
        return Err(MoveRejection::UnknownName);
    }

    if state.used_names.contains(name) {
        return Err(MoveRejection::AlreadyUsed);
    }

    // No chain constraint on the opening move.
    if let Some(required) = state.required_letter() {
        let chained = name
            .chars()
            .next()
            .is_some_and(|first| same_letter(first, required));
        if !chained {
            return Err(MoveRejection::BrokenChain {
                required,
                previous: state.last_name.clone(),
            });
        }
    }

    Ok(name.to_string())
}

/// Submit `candidate` for the player whose turn it is.
#[must_use]
pub fn apply_move(dictionary: &Dictionary, state: &GameState, candidate: &str) -> MoveOutcome {
    match validate_move(dictionary, state, candidate) {
        Ok(name) => {
            let mut next = state.clone();
            next.used_names.insert(&name);
            next.last_name = name;
            next.started = true;
            next.current_player = state.current_player.flip();
            next.message = format!("Great move! {}, your turn!", next.current_player);
            debug!(
                "accepted {:?}, {} to play",
                next.last_name, next.current_player
            );
            MoveOutcome {
                state: next,
                rejection: None,
            }
        }
        Err(rejection) => {
            debug!("rejected {candidate:?}: {rejection}");
            let mut next = state.clone();
            next.message = rejection.to_string();
            MoveOutcome {
                state: next,
                rejection: Some(rejection),
            }
        }
    }
}

/// A brand new game.
#[must_use]
pub fn restart() -> GameState {
    GameState::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::{GamePhase, Player};

    fn play(state: &GameState, name: &str) -> MoveOutcome {
        apply_move(Dictionary::standard(), state, name)
    }

    fn after(names: &[&str]) -> GameState {
        names.iter().fold(restart(), |state, name| {
            let outcome = play(&state, name);
            assert!(outcome.accepted(), "{name} should be accepted");
            outcome.state
        })
    }

    fn assert_rejected(state: &GameState, name: &str, expected: MoveRejection) {
        let outcome = play(state, name);
        assert_eq!(outcome.rejection, Some(expected.clone()));
        assert_eq!(outcome.message(), expected.to_string());

        let mut unchanged = outcome.state.clone();
        unchanged.message = state.message.clone();
        assert_eq!(&unchanged, state);
    }

    #[test]
    fn test_first_move_accepted() {
        let outcome = play(&restart(), "Arjun");

        assert!(outcome.accepted());
        assert_eq!(outcome.state.last_name, "Arjun");
        assert_eq!(outcome.state.current_player, Player::Player2);
        assert_eq!(outcome.state.phase(), GamePhase::InProgress);
        assert_eq!(outcome.message(), "Great move! Player 2, your turn!");
        assert!(outcome.state.used_names.contains("arjun"));
    }

    #[test]
    fn test_first_move_ignores_chain_rule() {
        for name in ["Zubin", "Queen", "Xitij", "eshan"] {
            assert!(play(&restart(), name).accepted(), "{name}");
        }
    }

    #[test]
    fn test_empty_name() {
        assert_rejected(&restart(), "", MoveRejection::EmptyName);
        assert_rejected(&restart(), "   \t", MoveRejection::EmptyName);
    }

    #[test]
    fn test_wrong_length() {
        assert_rejected(&restart(), "Neha", MoveRejection::WrongLength);
        assert_rejected(&restart(), "Vikram", MoveRejection::WrongLength);
    }

    #[test]
    fn test_input_is_trimmed() {
        let outcome = play(&restart(), "  Arjun \n");
        assert!(outcome.accepted());
        assert_eq!(outcome.state.last_name, "Arjun");
    }

    #[test]
    fn test_unknown_name() {
        assert_rejected(&restart(), "Bobby", MoveRejection::UnknownName);
    }

    #[test]
    fn test_length_checked_before_dictionary() {
        // Neither in the dictionary nor five letters long.
        assert_rejected(&restart(), "Alexander", MoveRejection::WrongLength);
    }

    #[test]
    fn test_chain_rule_rejection_names_letter_and_previous() {
        let state = after(&["Arjun"]);
        let outcome = play(&state, "Priya");

        assert!(!outcome.accepted());
        assert_eq!(
            outcome.message(),
            "Name must start with 'n' (the last letter of 'Arjun')!"
        );
        assert_eq!(outcome.state.current_player, Player::Player2);
        assert_eq!(outcome.state.last_name, "Arjun");
    }

    #[test]
    fn test_chain_rule_case_insensitive() {
        let state = after(&["Arjun"]);
        let outcome = play(&state, "NISHA");

        assert!(outcome.accepted());
        assert_eq!(outcome.state.last_name, "NISHA");
        assert_eq!(outcome.state.current_player, Player::Player1);
    }

    #[test]
    fn test_duplicate_rejected_case_insensitively() {
        let state = after(&["Arjun", "Nitin"]);
        assert_rejected(&state, "nitin", MoveRejection::AlreadyUsed);
        assert_rejected(&state, "ARJUN", MoveRejection::AlreadyUsed);
    }

    #[test]
    fn test_duplicate_checked_before_chain() {
        // "Nitin" ends with 'n' so it would also chain onto itself.
        let state = after(&["Arjun", "Nitin"]);
        assert_rejected(&state, "Nitin", MoveRejection::AlreadyUsed);
    }

    #[test]
    fn test_player_alternates_only_on_acceptance() {
        let state = after(&["Arjun"]);
        assert_eq!(state.current_player, Player::Player2);

        let rejected = play(&state, "Bobby");
        assert_eq!(rejected.state.current_player, Player::Player2);

        let accepted = play(&rejected.state, "Niraj");
        assert_eq!(accepted.state.current_player, Player::Player1);
    }

    #[test]
    fn test_long_chain_keeps_history_in_order() {
        let state = after(&["Arjun", "Nitin", "Niraj", "Jagan", "Nisha", "Anita"]);
        assert_eq!(
            state.used_names.to_vec(),
            vec!["Arjun", "Nitin", "Niraj", "Jagan", "Nisha", "Anita"]
        );
        assert_eq!(state.current_player, Player::Player1);
        assert_eq!(state.required_letter(), Some('a'));
        assert!(state.is_consistent(Dictionary::standard()));
    }

    #[test]
    fn test_restart_resets_everything() {
        let state = after(&["Arjun", "Nitin", "Niraj"]);
        assert_ne!(state, restart());

        let fresh = restart();
        assert_eq!(fresh, GameState::default());
        assert!(fresh.last_name.is_empty());
        assert!(fresh.used_names.is_empty());
        assert!(!fresh.started);
        assert_eq!(fresh.current_player, Player::Player1);
    }

    #[test]
    fn test_non_ascii_look_alike_rejected() {
        // U+212A KELVIN SIGN folds to 'k' under Unicode lowercasing.
        assert_rejected(&restart(), "\u{212A}iran", MoveRejection::UnknownName);
        assert_rejected(
            &after(&["Ashok"]),
            "\u{212A}unal",
            MoveRejection::UnknownName,
        );
    }

    #[test]
    fn test_validate_move_does_not_touch_state() {
        let state = after(&["Arjun"]);
        let before = state.clone();
        assert_eq!(
            validate_move(Dictionary::standard(), &state, " Nanda "),
            Ok("Nanda".to_string())
        );
        assert_eq!(state, before);
    }
}
