//! Page store trait and error types.
//!
//! Provides the core [`PageStore`] trait for reading and writing pages by title,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Title Convention
//!
//! All title parameters are **page titles**, not file paths:
//! - `"FrontPage"` - the site root, never deletable
//! - `"MyPage"` - a regular page
//!
//! Implementations map titles to their internal storage format and must refuse
//! titles that could escape the storage root.

use std::path::{Component, Path, PathBuf};

/// Title of the reserved site root page.
pub const FRONT_PAGE: &str = "FrontPage";

/// Suffix appended to a title to form its backing file name.
pub const PAGE_SUFFIX: &str = ".txt";

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Page does not exist (or could not be read).
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Title cannot be mapped to a page inside the storage root.
    InvalidTitle,
    /// Operation refused for a reserved page.
    Protected,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Title the operation was invoked with (if applicable).
    pub title: Option<String>,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            title: None,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach title context.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error for a title.
    #[must_use]
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_title(title)
    }

    /// Create an error refusing to touch the front page.
    #[must_use]
    pub fn protected(title: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::Protected).with_title(title)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Check whether this error means the page is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (title: Foo)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Page not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidTitle => "Invalid title",
            StorageErrorKind::Protected => "Protected page",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(title) = &self.title {
            write!(f, " (title: {title})")?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Reject titles that cannot name a single file directly under the root.
///
/// Refuses empty titles, path separators, parent or current directory
/// components, NUL bytes, and leading dots (reserved for in-flight writes).
pub(crate) fn validate_title(title: &str) -> Result<(), StorageError> {
    let invalid = title.is_empty()
        || title.starts_with('.')
        || title.contains(['/', '\\', '\0'])
        || Path::new(title)
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));

    if invalid {
        return Err(StorageError::new(StorageErrorKind::InvalidTitle).with_title(title));
    }
    Ok(())
}

/// Flat page storage keyed by title.
///
/// A page's identity is a pure function of its title; two distinct titles
/// never share a backing entry. There is no locking: concurrent saves to the
/// same title are last-writer-wins, but a reader never observes a partially
/// written body.
pub trait PageStore: Send + Sync {
    /// Read a page body.
    ///
    /// # Errors
    ///
    /// Any failure to read is reported with [`StorageErrorKind::NotFound`];
    /// callers cannot tell a missing page from an unreadable one.
    fn load(&self, title: &str) -> Result<Vec<u8>, StorageError>;

    /// Create or replace a page body wholesale.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the title is invalid or the write fails.
    fn save(&self, title: &str, body: &[u8]) -> Result<(), StorageError>;

    /// Remove a page.
    ///
    /// # Errors
    ///
    /// Returns [`StorageErrorKind::Protected`] for [`FRONT_PAGE`] without
    /// touching storage, [`StorageErrorKind::NotFound`] if the page is absent,
    /// or another kind if removal fails.
    fn delete(&self, title: &str) -> Result<(), StorageError>;

    /// List all stored page titles.
    ///
    /// Order is backend-defined; callers must not depend on it.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the listing cannot be produced.
    fn list_titles(&self) -> Result<Vec<String>, StorageError>;
}
