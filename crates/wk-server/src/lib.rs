//! HTTP server for the wk wiki.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - Wiki actions (`/view/`, `/edit/`, `/save/`, `/delete/`, `/admin`, `/create/`)
//! - Static files from the public directory under `/static/`
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wk_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         data_dir: PathBuf::from("data"),
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (wk-server)
//!                        │
//!                        ├─► /static/* ──► tower-http ServeDir
//!                        │
//!                        └─► dispatcher ──► Route ──► action
//!                                                       │
//!                                                       ├─► Site ──► PageStore
//!                                                       └─► Templates
//! ```

mod app;
mod dispatch;
mod error;
mod identity;
mod middleware;
mod route;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use axum::http::HeaderName;
use wk_renderer::Templates;
use wk_site::Site;
use wk_storage::FsPageStore;

pub use route::{Action, Route, RouteMatch, is_addressable_title};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding page files.
    pub data_dir: PathBuf,
    /// Directory holding page templates.
    pub templates_dir: PathBuf,
    /// Directory served under `/static/`.
    pub public_dir: PathBuf,
    /// Header carrying the JSON-encoded requester identity.
    pub identity_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            templates_dir: PathBuf::from("templates"),
            public_dir: PathBuf::from("public"),
            identity_header: "X-Forwarded-Account".to_owned(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the identity header name is invalid, the address
/// cannot be parsed or bound, or the server fails while running.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let identity_header = HeaderName::from_bytes(config.identity_header.as_bytes())?;

    let store = Arc::new(FsPageStore::new(config.data_dir.clone()));
    let data_dir = store.root().display().to_string();
    let state = Arc::new(AppState {
        site: Site::new(store),
        templates: Templates::from_dir(&config.templates_dir),
        identity_header,
    });

    let app = app::create_router(state, &config.public_dir);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(
        address = %addr,
        data_dir = %data_dir,
        templates_dir = %config.templates_dir.display(),
        "Starting server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from wk config.
#[must_use]
pub fn server_config_from_wk_config(config: &wk_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        data_dir: config.paths.data_dir.clone(),
        templates_dir: config.paths.templates_dir.clone(),
        public_dir: config.paths.public_dir.clone(),
        identity_header: config.identity.header.clone(),
    }
}
