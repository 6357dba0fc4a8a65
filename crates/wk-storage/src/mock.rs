//! Mock page store for testing.
//!
//! Provides [`MockPageStore`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::storage::{FRONT_PAGE, PageStore, StorageError, StorageErrorKind, validate_title};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock page store for testing.
///
/// Stores pages in memory. Use the builder methods to configure the mock
/// with test data or to simulate backend failures.
///
/// # Example
///
/// ```ignore
/// use wk_storage::{MockPageStore, PageStore};
///
/// let store = MockPageStore::new().with_page("FrontPage", "Welcome");
/// let body = store.load("FrontPage").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockPageStore {
    pages: RwLock<BTreeMap<String, Vec<u8>>>,
    fail_writes: AtomicBool,
    fail_listing: AtomicBool,
}

impl MockPageStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with the given body.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.pages.write().unwrap().insert(title.into(), body.into());
        self
    }

    /// Make every `save` and `delete` fail with [`StorageErrorKind::Other`].
    #[must_use]
    pub fn with_failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::Relaxed);
        self
    }

    /// Make `list_titles` fail with [`StorageErrorKind::Other`].
    #[must_use]
    pub fn with_failing_listing(self) -> Self {
        self.fail_listing.store(true, Ordering::Relaxed);
        self
    }

    /// Check whether a page is present.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.pages.read().unwrap().contains_key(title)
    }

    fn write_failure(title: &str) -> StorageError {
        StorageError::new(StorageErrorKind::Other)
            .with_title(title)
            .with_backend(BACKEND)
            .with_source(std::io::Error::other("simulated write failure"))
    }
}

impl PageStore for MockPageStore {
    fn load(&self, title: &str) -> Result<Vec<u8>, StorageError> {
        self.pages
            .read()
            .unwrap()
            .get(title)
            .cloned()
            .ok_or_else(|| StorageError::not_found(title).with_backend(BACKEND))
    }

    fn save(&self, title: &str, body: &[u8]) -> Result<(), StorageError> {
        validate_title(title).map_err(|e| e.with_backend(BACKEND))?;
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(Self::write_failure(title));
        }
        self.pages
            .write()
            .unwrap()
            .insert(title.to_owned(), body.to_vec());
        Ok(())
    }

    fn delete(&self, title: &str) -> Result<(), StorageError> {
        if title == FRONT_PAGE {
            return Err(StorageError::protected(title).with_backend(BACKEND));
        }
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(Self::write_failure(title));
        }
        self.pages
            .write()
            .unwrap()
            .remove(title)
            .map(|_| ())
            .ok_or_else(|| StorageError::not_found(title).with_backend(BACKEND))
    }

    fn list_titles(&self) -> Result<Vec<String>, StorageError> {
        if self.fail_listing.load(Ordering::Relaxed) {
            return Err(StorageError::new(StorageErrorKind::Other).with_backend(BACKEND));
        }
        Ok(self.pages.read().unwrap().keys().cloned().collect())
    }
}
