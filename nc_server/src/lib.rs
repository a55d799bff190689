//! HTTP server for the name chain game.
//!
//! Wraps [`name_chain::GameService`] in an axum router with session cookies,
//! request correlation, structured logging and Prometheus metrics.

pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
