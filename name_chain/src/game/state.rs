//! Game state value and its building blocks.

use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

use super::{
    constants::{FIRST_MOVE_PROMPT, NAME_LENGTH},
    dictionary::{Dictionary, name_key},
};

/// One of the two seats at the game.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Player {
    #[default]
    #[serde(rename = "Player 1")]
    Player1,
    #[serde(rename = "Player 2")]
    Player2,
}

impl Player {
    /// The other player.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Player1 => Self::Player2,
            Self::Player2 => Self::Player1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Player1 => "Player 1",
            Self::Player2 => "Player 2",
        };
        write!(f, "{repr}")
    }
}

/// Names accepted so far.
///
/// Membership is case-insensitive while iteration yields names in submission
/// order with the casing they were submitted in.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct UsedNames {
    names: Vec<String>,
    keys: HashSet<String>,
}

impl UsedNames {
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.keys.contains(&name_key(name))
    }

    /// Record a name. Returns false (and leaves the set alone) if a name
    /// matching case-insensitively is already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if !self.keys.insert(name_key(name)) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// The most recently recorded name.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }
}

impl PartialEq for UsedNames {
    fn eq(&self, other: &Self) -> bool {
        self.names == other.names
    }
}

impl Eq for UsedNames {}

impl<S: AsRef<str>> FromIterator<S> for UsedNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut used = Self::default();
        for name in iter {
            used.insert(name.as_ref());
        }
        used
    }
}

impl From<Vec<String>> for UsedNames {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<UsedNames> for Vec<String> {
    fn from(used: UsedNames) -> Self {
        used.names
    }
}

/// Coarse lifecycle position of a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
}

/// Everything needed to resume a game.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub last_name: String,
    pub used_names: UsedNames,
    pub current_player: Player,
    pub started: bool,
    /// Advisory text for the players; the rules never look at it.
    pub message: String,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            last_name: String::new(),
            used_names: UsedNames::default(),
            current_player: Player::Player1,
            started: false,
            message: FIRST_MOVE_PROMPT.to_string(),
        }
    }
}

impl GameState {
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.started {
            GamePhase::InProgress
        } else {
            GamePhase::NotStarted
        }
    }

    /// The letter the next name has to start with, if any.
    #[must_use]
    pub fn required_letter(&self) -> Option<char> {
        if self.started {
            self.last_name.chars().last()
        } else {
            None
        }
    }

    /// Whether this state could have been produced by playing the game with
    /// `dictionary`. Stored states that fail this are treated as corrupt.
    #[must_use]
    pub fn is_consistent(&self, dictionary: &Dictionary) -> bool {
        let names_valid = self
            .used_names
            .iter()
            .all(|name| name.chars().count() == NAME_LENGTH && dictionary.contains(name));
        if !names_valid {
            return false;
        }

        let expected_player = if self.used_names.len() % 2 == 0 {
            Player::Player1
        } else {
            Player::Player2
        };
        if self.current_player != expected_player {
            return false;
        }

        if self.started {
            !self.last_name.is_empty() && self.used_names.last() == Some(self.last_name.as_str())
        } else {
            self.last_name.is_empty() && self.used_names.is_empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_flip() {
        assert_eq!(Player::Player1.flip(), Player::Player2);
        assert_eq!(Player::Player2.flip(), Player::Player1);
        assert_eq!(Player::Player1.flip().flip(), Player::Player1);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::Player1.to_string(), "Player 1");
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }

    #[test]
    fn test_used_names_case_insensitive_membership() {
        let mut used = UsedNames::default();
        assert!(used.insert("Nisha"));
        assert!(used.contains("nisha"));
        assert!(used.contains("NISHA"));
        assert!(!used.insert("nisha"));
        assert_eq!(used.len(), 1);
        assert_eq!(used.iter().collect::<Vec<_>>(), vec!["Nisha"]);
    }

    #[test]
    fn test_used_names_preserve_submission_order() {
        let used: UsedNames = ["Arjun", "Nitin", "Niraj"].into_iter().collect();
        assert_eq!(used.to_vec(), vec!["Arjun", "Nitin", "Niraj"]);
    }

    #[test]
    fn test_default_state() {
        let state = GameState::default();
        assert_eq!(state.phase(), GamePhase::NotStarted);
        assert_eq!(state.required_letter(), None);
        assert_eq!(state.current_player, Player::Player1);
        assert_eq!(state.message, FIRST_MOVE_PROMPT);
        assert!(state.is_consistent(Dictionary::standard()));
    }

    #[test]
    fn test_serialized_field_names() {
        let state = GameState {
            last_name: "Arjun".to_string(),
            used_names: ["Arjun"].into_iter().collect(),
            current_player: Player::Player2,
            started: true,
            message: "Great move! Player 2, your turn!".to_string(),
        };

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["lastName"], "Arjun");
        assert_eq!(value["usedNames"], serde_json::json!(["Arjun"]));
        assert_eq!(value["currentPlayer"], "Player 2");
        assert_eq!(value["started"], true);
        assert_eq!(value["message"], "Great move! Player 2, your turn!");

        let decoded: GameState = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, state);
        assert!(decoded.used_names.contains("arjun"));
    }

    #[test]
    fn test_deserialize_collapses_duplicate_names() {
        let json = r#"{"lastName":"Arjun","usedNames":["Arjun","ARJUN"],"currentPlayer":"Player 2","started":true,"message":""}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.used_names.len(), 1);
    }

    #[test]
    fn test_inconsistent_states() {
        let dictionary = Dictionary::standard();

        let started_without_name = GameState {
            started: true,
            ..GameState::default()
        };
        assert!(!started_without_name.is_consistent(dictionary));

        let unknown_name = GameState {
            last_name: "Bobby".to_string(),
            used_names: ["Bobby"].into_iter().collect(),
            current_player: Player::Player2,
            started: true,
            message: String::new(),
        };
        assert!(!unknown_name.is_consistent(dictionary));

        let wrong_turn = GameState {
            last_name: "Arjun".to_string(),
            used_names: ["Arjun"].into_iter().collect(),
            current_player: Player::Player1,
            started: true,
            message: String::new(),
        };
        assert!(!wrong_turn.is_consistent(dictionary));

        let not_started_with_names = GameState {
            used_names: ["Arjun"].into_iter().collect(),
            current_player: Player::Player2,
            ..GameState::default()
        };
        assert!(!not_started_with_names.is_consistent(dictionary));
    }

    #[test]
    fn test_last_name_must_be_latest_entry() {
        let dictionary = Dictionary::standard();

        let reordered = GameState {
            last_name: "Arjun".to_string(),
            used_names: ["Arjun", "Nitin"].into_iter().collect(),
            current_player: Player::Player1,
            started: true,
            message: String::new(),
        };
        assert!(!reordered.is_consistent(dictionary));

        let in_order = GameState {
            last_name: "Nitin".to_string(),
            ..reordered
        };
        assert!(in_order.is_consistent(dictionary));
        assert_eq!(in_order.used_names.last(), Some("Nitin"));
    }
}
