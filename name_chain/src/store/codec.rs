//! JSON encoding of stored game states.

use crate::game::GameState;

use super::StoreResult;

pub fn encode(state: &GameState) -> StoreResult<String> {
    Ok(serde_json::to_string(state)?)
}

pub fn decode(raw: &str) -> StoreResult<GameState> {
    Ok(serde_json::from_str(raw)?)
}
