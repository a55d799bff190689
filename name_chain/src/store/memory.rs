//! In-process session store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::game::GameState;

use super::{SessionId, SessionStore, StoreResult, codec};

/// Keeps encoded states in a map for the lifetime of the process.
///
/// States are stored in their JSON form so that every load goes through the
/// same decoding path as the database store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: RwLock<HashMap<SessionId, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with a saved state.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Store raw bytes for a session, bypassing encoding.
    #[doc(hidden)]
    pub async fn insert_raw(&self, session: SessionId, raw: impl Into<String>) {
        self.sessions.write().await.insert(session, raw.into());
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, session: &SessionId) -> StoreResult<Option<GameState>> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session)
            .map(|raw| codec::decode(raw))
            .transpose()
    }

    async fn save(&self, session: &SessionId, state: &GameState) -> StoreResult<()> {
        let raw = codec::encode(state)?;
        self.sessions.write().await.insert(*session, raw);
        Ok(())
    }

    async fn remove(&self, session: &SessionId) -> StoreResult<()> {
        self.sessions.write().await.remove(session);
        Ok(())
    }
}
