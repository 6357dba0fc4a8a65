//! Application state.
//!
//! Shared state for all request handlers.

use axum::http::HeaderName;
use wk_renderer::Templates;
use wk_site::Site;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Page access over the configured store.
    pub(crate) site: Site,
    /// Page templates.
    pub(crate) templates: Templates,
    /// Header carrying the requester identity.
    pub(crate) identity_header: HeaderName,
}
