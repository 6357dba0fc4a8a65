//! Page access on top of a [`PageStore`].
//!
//! [`Site`] is constructed once at startup with an explicit store and shared
//! by reference across requests. It collapses store failures where a request
//! must not fail because of them: a page that cannot be read is treated as
//! absent, and an unavailable sibling listing becomes an empty list.

use std::sync::Arc;

use wk_storage::{PageStore, StorageError};

use crate::page::Page;
use crate::view::PageView;

/// Wiki pages backed by a [`PageStore`].
pub struct Site {
    store: Arc<dyn PageStore>,
}

impl Site {
    /// Create a site over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self { store }
    }

    /// Load a page, or `None` if it does not exist or cannot be read.
    pub fn load_page(&self, title: &str) -> Option<Page> {
        match self.store.load(title) {
            Ok(body) => Some(Page::new(title, body)),
            Err(e) => {
                tracing::debug!(title = %title, error = %e, "Page not loaded");
                None
            }
        }
    }

    /// Persist a page body, replacing any previous body.
    pub fn save_page(&self, page: &Page) -> Result<(), StorageError> {
        self.store.save(&page.title, &page.body)
    }

    /// Delete a page.
    pub fn delete_page(&self, title: &str) -> Result<(), StorageError> {
        self.store.delete(title)
    }

    /// List stored page titles, propagating store failures.
    pub fn titles(&self) -> Result<Vec<String>, StorageError> {
        self.store.list_titles()
    }

    /// Title-only stubs for every stored page.
    ///
    /// Bodies are not loaded. A failed listing yields an empty list.
    pub fn sibling_pages(&self) -> Vec<Page> {
        let titles = self.titles().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to list pages");
            Vec::new()
        });
        titles.into_iter().map(Page::empty).collect()
    }

    /// Build the template context for a page.
    pub fn present(&self, page: &Page) -> PageView {
        PageView::new(page, self.sibling_pages())
    }
}
