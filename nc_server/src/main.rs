//! Name chain game server.
//!
//! Serves the game over HTTP, keeping one game per session cookie in either
//! process memory or PostgreSQL.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Error};
use name_chain::{GameService, MemoryStore, PgSessionStore, SessionStore, db::Database};
use nc_server::{
    api,
    config::{ServerConfig, StoreConfig},
    logging, metrics,
};
use pico_args::Arguments;
use tracing::info;

const HELP: &str = "\
Run the name chain game server

USAGE:
  nc_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:6969]
  --db-url     URL         Database connection string  [default: env DATABASE_URL, else in-memory store]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  DATABASE_URL             PostgreSQL connection string
  DB_MAX_CONNECTIONS       Connection pool size
  METRICS_BIND             Prometheus exporter address (e.g., 127.0.0.1:9090)
  RUST_LOG                 Log filter (e.g., info,name_chain=debug)
";

struct Args {
    bind: Option<SocketAddr>,
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.opt_value_from_str("--bind")?,
        database_url: pargs.opt_value_from_str("--db-url")?,
    };

    logging::init();

    let config = ServerConfig::from_env(args.bind, args.database_url)?;
    config.validate()?;

    if let Some(addr) = config.metrics_bind {
        metrics::init_metrics(addr).map_err(|e| anyhow::anyhow!(e))?;
        info!("Prometheus metrics available at http://{}/metrics", addr);
    }

    let mut database = None;
    let store: Arc<dyn SessionStore> = match &config.store {
        StoreConfig::Memory => {
            info!("Using in-memory session store; games are lost on shutdown");
            Arc::new(MemoryStore::new())
        }
        StoreConfig::Postgres(db_config) => {
            info!("Connecting to database");
            let db = Database::new(db_config)
                .await
                .context("Failed to connect to database")?;
            db.health_check()
                .await
                .context("Database health check failed")?;
            let store = PgSessionStore::new(db.pool().clone());
            store
                .migrate()
                .await
                .context("Failed to prepare game_sessions table")?;
            info!("Database connected successfully");
            database = Some(db);
            Arc::new(store)
        }
    };

    let service = GameService::with_standard_dictionary(store);
    info!(
        "Loaded dictionary with {} names",
        service.dictionary().len()
    );

    let app = api::create_router(api::AppState {
        service: Arc::new(service),
    });

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down server...");

    if let Some(db) = database {
        db.close().await;
        info!("Database connections closed");
    }

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
