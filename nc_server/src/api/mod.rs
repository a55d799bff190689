//! HTTP API for the name chain server.
//!
//! # Modules
//!
//! - [`game`]: Game handlers (current state, play, restart)
//! - [`middleware`]: Session cookie resolution
//! - [`request_id`]: Request correlation, request logging and HTTP metrics
//!
//! # Endpoints
//!
//! ```text
//! GET  /game           - Current state of the caller's game
//! POST /game/play      - Submit a name (form field `name`)
//! POST /game/restart   - Start a new game
//! ```
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use nc_server::api::{AppState, create_router};
//! use name_chain::{GameService, MemoryStore};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = GameService::with_standard_dictionary(Arc::new(MemoryStore::new()));
//! let app = create_router(AppState {
//!     service: Arc::new(service),
//! });
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # CORS
//!
//! CORS is configured permissively for development. In production, configure
//! appropriate origins, methods, and headers.

pub mod game;
pub mod middleware;
pub mod request_id;

use axum::{
    Router,
    routing::{get, post},
};
use name_chain::GameService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request (cheap due to the Arc wrapper).
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GameService>,
}

/// Create the API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/game", get(game::get_game))
        .route("/game/play", post(game::play))
        .route("/game/restart", post(game::restart))
        .layer(axum::middleware::from_fn(middleware::session_middleware))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
