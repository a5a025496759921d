//! Static shell server for the routing demo.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client routes on the location path, so every path the client knows
//! (`/about`) must load the same `index.html`. This binary serves the built
//! client bundle and answers any unknown path with that page.

mod config;
mod routes;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{ConfigError, ShellConfig};

#[derive(Debug, thiserror::Error)]
enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ShellError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = ShellConfig::from_env()?;
    config.check_dist()?;

    let app = routes::app(&config.dist_dir);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ShellError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, dist = %config.dist_dir.display(), "shell listening");
    axum::serve(listener, app).await.map_err(ShellError::Serve)
}
