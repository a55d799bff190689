//! Per-session persistence of game states.
//!
//! The engine never touches storage. Callers load a [`GameState`] through a
//! [`SessionStore`], hand it to the engine and save whatever comes back.
//!
//! ## Example
//!
//! ```
//! use name_chain::store::{MemoryStore, SessionId, SessionStore};
//! use name_chain::game::restart;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), name_chain::store::StoreError> {
//! let store = MemoryStore::new();
//! let session = SessionId::new();
//!
//! assert!(store.load(&session).await?.is_none());
//! store.save(&session, &restart()).await?;
//! assert_eq!(store.load(&session).await?, Some(restart()));
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod errors;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::game::GameState;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use postgres::PgSessionStore;

/// Identifies one independent game.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SessionId(Uuid);

impl SessionId {
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Load/save of game states keyed by session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the state for `session`, or `None` if nothing was saved yet.
    async fn load(&self, session: &SessionId) -> StoreResult<Option<GameState>>;

    /// Replace the state for `session`.
    async fn save(&self, session: &SessionId, state: &GameState) -> StoreResult<()>;

    /// Forget `session` entirely.
    async fn remove(&self, session: &SessionId) -> StoreResult<()>;
}
