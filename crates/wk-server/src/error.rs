//! Request error type and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wk_renderer::RenderError;
use wk_storage::{StorageError, StorageErrorKind};

/// Error ending a request.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Path did not decode to a route.
    #[error("404 page not found")]
    RouteNotFound(String),
    /// Attempt to delete the front page.
    #[error("You cannot delete the front page")]
    FrontPageProtected,
    /// Title cannot name a page.
    #[error("Invalid page title: {0:?}")]
    InvalidTitle(String),
    /// Store write or delete failed.
    #[error("Storage error: {0}")]
    Storage(#[source] StorageError),
    /// Template failed.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    /// Request task panicked or was cancelled.
    #[error("Request task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<StorageError> for ServerError {
    fn from(e: StorageError) -> Self {
        match e.kind {
            StorageErrorKind::Protected => Self::FrontPageProtected,
            StorageErrorKind::InvalidTitle => Self::InvalidTitle(e.title.unwrap_or_default()),
            _ => Self::Storage(e),
        }
    }
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
            Self::FrontPageProtected | Self::InvalidTitle(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Render(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::RouteNotFound(path) => {
                tracing::debug!(path = %path, "No route");
                self.to_string()
            }
            Self::FrontPageProtected | Self::InvalidTitle(_) => {
                tracing::warn!(error = %self, "Rejected request");
                self.to_string()
            }
            Self::Storage(_) | Self::Render(_) | Self::Task(_) => {
                tracing::error!(error = %self, "Request failed");
                "Internal Server Error".to_owned()
            }
        };
        (status, body).into_response()
    }
}
