//! Structured logging configuration.
//!
//! The server logs through `tracing`. Records emitted by the game library
//! through the `log` facade are bridged into the same subscriber.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured logging
///
/// Log levels are configurable via the `RUST_LOG` env var.
///
/// # Example
///
/// ```no_run
/// use nc_server::logging;
///
/// #[tokio::main]
/// async fn main() {
///     logging::init();
///     tracing::info!("Server starting");
/// }
/// ```
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("Structured logging initialized");
}

/// Log a submitted move
///
/// # Arguments
///
/// * `session` - Session the move was played in
/// * `name` - Name as submitted
/// * `accepted` - Whether the engine accepted it
/// * `message` - Outcome text shown to the players
pub fn log_move(session: &str, name: &str, accepted: bool, message: &str) {
    if accepted {
        tracing::info!(session = session, name = name, "Move accepted");
    } else {
        tracing::debug!(
            session = session,
            name = name,
            reason = message,
            "Move rejected"
        );
    }
}

/// Log API request/response
///
/// Requests slower than a second are logged at `warn`.
pub fn log_api_request(method: &str, path: &str, status_code: u16, duration_ms: u64) {
    if duration_ms > 1000 {
        tracing::warn!(
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "Slow API request"
        );
    } else {
        tracing::info!(
            http_method = method,
            http_path = path,
            http_status = status_code,
            duration_ms = duration_ms,
            "API request completed"
        );
    }
}
