//! Router construction.
//!
//! Builds the axum router: static assets under `/static`, every other path
//! through the dispatcher.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::dispatch;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `public_dir` - Directory served verbatim under `/static/`
pub(crate) fn create_router(state: Arc<AppState>, public_dir: &Path) -> Router {
    Router::new()
        .nest_service("/static", ServeDir::new(public_dir))
        .fallback(dispatch::dispatch)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
