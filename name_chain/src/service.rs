//! Session-aware front door to the engine.
//!
//! [`GameService`] ties a [`SessionStore`] to the pure engine: load the
//! session's state, run the move, persist the result. Storage trouble never
//! reaches the players; it's logged and the game carries on from a fresh
//! state.

use log::{error, warn};
use std::sync::Arc;

use crate::game::{Dictionary, GameState, MoveOutcome, apply_move, restart};
use crate::store::{SessionId, SessionStore, StoreError};

/// Runs games for many sessions against a shared store.
#[derive(Clone)]
pub struct GameService {
    store: Arc<dyn SessionStore>,
    dictionary: Arc<Dictionary>,
}

impl GameService {
    pub fn new(store: Arc<dyn SessionStore>, dictionary: Arc<Dictionary>) -> Self {
        Self { store, dictionary }
    }

    /// Service using the built-in dictionary.
    pub fn with_standard_dictionary(store: Arc<dyn SessionStore>) -> Self {
        Self::new(store, Arc::new(Dictionary::standard().clone()))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Load the session's state, falling back to a new game when there is
    /// none or when it can't be read.
    async fn load_or_default(&self, session: &SessionId) -> GameState {
        let loaded = match self.store.load(session).await {
            Ok(Some(state)) if state.is_consistent(&self.dictionary) => Ok(Some(state)),
            Ok(Some(_)) => Err(StoreError::Inconsistent),
            other => other,
        };

        match loaded {
            Ok(Some(state)) => state,
            Ok(None) => GameState::default(),
            Err(e) => {
                warn!("Failed to load game for session {session}, starting over: {e}");
                GameState::default()
            }
        }
    }

    async fn persist(&self, session: &SessionId, state: &GameState) {
        if let Err(e) = self.store.save(session, state).await {
            error!("Failed to save game for session {session}: {e}");
        }
    }

    /// Current state of the session's game.
    pub async fn current(&self, session: &SessionId) -> GameState {
        self.load_or_default(session).await
    }

    /// Submit a name on behalf of whoever's turn it is.
    ///
    /// Only accepted moves are written back; a rejection leaves the stored
    /// game as it was.
    pub async fn play(&self, session: &SessionId, name: &str) -> MoveOutcome {
        let state = self.load_or_default(session).await;
        let outcome = apply_move(&self.dictionary, &state, name);
        if outcome.accepted() {
            self.persist(session, &outcome.state).await;
        }
        outcome
    }

    /// Throw the session's game away and start a new one.
    pub async fn restart(&self, session: &SessionId) -> GameState {
        let state = restart();
        self.persist(session, &state).await;
        state
    }
}
