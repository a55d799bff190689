//! Session cookie middleware.
//!
//! Each browser gets its own game, identified by the `nc_session` cookie.
//! The middleware resolves the cookie to a [`SessionId`] and injects it into
//! request extensions; requests without a usable cookie get a fresh session
//! and a `Set-Cookie` header on the way out.
//!
//! # Extracting the session
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use name_chain::SessionId;
//!
//! async fn handler(Extension(session): Extension<SessionId>) -> String {
//!     format!("Playing in session {session}")
//! }
//! # let _ = handler;
//! ```

use axum::{
    extract::Request,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
    },
    middleware::Next,
    response::Response,
};
use name_chain::SessionId;

/// Name of the cookie carrying the session ID
pub const SESSION_COOKIE: &str = "nc_session";

/// Find the session cookie among the request's `Cookie` headers
pub fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}

fn session_cookie(session: &SessionId) -> String {
    format!("{SESSION_COOKIE}={session}; Path=/; HttpOnly; SameSite=Lax")
}

/// Resolve or create the caller's session.
///
/// # Behavior
///
/// - **Valid cookie**: Injects the parsed `SessionId` → Calls next handler
/// - **Missing or malformed cookie**: Injects a new `SessionId` → Calls next
///   handler → Adds `Set-Cookie` to the response
pub async fn session_middleware(mut request: Request, next: Next) -> Response {
    let existing = session_from_headers(request.headers());
    let session = existing.unwrap_or_else(SessionId::new);
    request.extensions_mut().insert(session);

    let mut response = next.run(request).await;

    if existing.is_none() {
        tracing::debug!(session = %session, "Issued new session");
        if let Ok(value) = HeaderValue::from_str(&session_cookie(&session)) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}
