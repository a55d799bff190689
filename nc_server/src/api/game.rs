//! Game API handlers.
//!
//! Three endpoints drive a session's game:
//! - `GET /game` returns the current state
//! - `POST /game/play` submits a name (form field `name`)
//! - `POST /game/restart` starts over
//!
//! All of them answer with the same JSON shape.
//!
//! # Examples
//!
//! ```bash
//! curl -c jar -b jar http://localhost:6969/game
//! curl -c jar -b jar -X POST http://localhost:6969/game/play -d 'name=Arjun'
//! ```

use axum::{
    Form, Json,
    extract::{Extension, State},
};
use name_chain::{GameState, MoveOutcome, MoveRejection, SessionId};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::{logging, metrics};

#[derive(Debug, Deserialize)]
pub struct PlayRequest {
    /// A missing field is treated like an empty submission.
    #[serde(default)]
    pub name: String,
}

/// Wire representation of a game.
///
/// ```json
/// {
///   "lastName": "Arjun",
///   "usedNames": ["Arjun"],
///   "currentPlayer": "Player 2",
///   "started": true,
///   "message": "Great move! Player 2, your turn!",
///   "accepted": true
/// }
/// ```
#[derive(Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub last_name: String,
    pub used_names: Vec<String>,
    pub current_player: String,
    pub started: bool,
    pub message: String,
    /// Only present in answers to `POST /game/play`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted: Option<bool>,
}

impl From<GameState> for GameStateResponse {
    fn from(state: GameState) -> Self {
        Self {
            used_names: state.used_names.into(),
            current_player: state.current_player.to_string(),
            last_name: state.last_name,
            started: state.started,
            message: state.message,
            accepted: None,
        }
    }
}

impl From<MoveOutcome> for GameStateResponse {
    fn from(outcome: MoveOutcome) -> Self {
        let accepted = outcome.accepted();
        Self {
            accepted: Some(accepted),
            ..GameStateResponse::from(outcome.state)
        }
    }
}

fn outcome_label(outcome: &MoveOutcome) -> &'static str {
    match &outcome.rejection {
        None => "accepted",
        Some(MoveRejection::EmptyName) => "empty",
        Some(MoveRejection::WrongLength) => "wrong_length",
        Some(MoveRejection::UnknownName) => "unknown_name",
        Some(MoveRejection::AlreadyUsed) => "already_used",
        Some(MoveRejection::BrokenChain { .. }) => "broken_chain",
    }
}

/// Current state of the caller's game.
pub async fn get_game(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<GameStateResponse> {
    Json(state.service.current(&session).await.into())
}

/// Submit a name for the player whose turn it is.
///
/// Rejected names still answer `200 OK`; the reason is in `message` and
/// `accepted` is false.
pub async fn play(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Form(request): Form<PlayRequest>,
) -> Json<GameStateResponse> {
    let outcome = state.service.play(&session, &request.name).await;

    metrics::moves_total(outcome_label(&outcome));
    logging::log_move(
        &session.to_string(),
        request.name.trim(),
        outcome.accepted(),
        outcome.message(),
    );

    Json(outcome.into())
}

/// Start the caller's game over.
pub async fn restart(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<GameStateResponse> {
    let game = state.service.restart(&session).await;
    metrics::game_restarts_total();
    tracing::info!(session = %session, "Game restarted");
    Json(game.into())
}
