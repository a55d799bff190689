//! PostgreSQL-backed session store.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::game::GameState;

use super::{SessionId, SessionStore, StoreResult, codec};

const CREATE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS game_sessions (
    session_id UUID PRIMARY KEY,
    state TEXT NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Stores one JSON-encoded state per session row.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `game_sessions` table if it doesn't exist yet.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn load(&self, session: &SessionId) -> StoreResult<Option<GameState>> {
        let row = sqlx::query("SELECT state FROM game_sessions WHERE session_id = $1")
            .bind(*session.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("state")?;
                Ok(Some(codec::decode(&raw)?))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, session: &SessionId, state: &GameState) -> StoreResult<()> {
        let raw = codec::encode(state)?;
        sqlx::query(
            "INSERT INTO game_sessions (session_id, state, updated_at) VALUES ($1, $2, NOW())
             ON CONFLICT (session_id) DO UPDATE SET state = EXCLUDED.state, updated_at = NOW()",
        )
        .bind(*session.as_uuid())
        .bind(raw)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove(&self, session: &SessionId) -> StoreResult<()> {
        sqlx::query("DELETE FROM game_sessions WHERE session_id = $1")
            .bind(*session.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
