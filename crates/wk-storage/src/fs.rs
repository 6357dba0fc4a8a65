//! Filesystem page store.
//!
//! Provides [`FsPageStore`], which keeps one file per page at
//! `<root>/<title>.txt` containing the raw body bytes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::storage::{
    FRONT_PAGE, PAGE_SUFFIX, PageStore, StorageError, StorageErrorKind, validate_title,
};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem page store.
///
/// Writes go to a hidden temp file in the root directory which is then renamed
/// over the page file, so concurrent readers see either the old body or the
/// new one. Page files are created owner read/write only.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use wk_storage::{FsPageStore, PageStore};
///
/// let store = FsPageStore::new(PathBuf::from("data"));
/// let titles = store.list_titles()?;
/// ```
#[derive(Debug, Clone)]
pub struct FsPageStore {
    /// Root directory holding page files.
    root: PathBuf,
}

impl FsPageStore {
    /// Create a store rooted at `root`.
    ///
    /// The directory does not need to exist yet; it is created on first save.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory of this store.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a validated title to its backing file.
    fn page_path(&self, title: &str) -> Result<PathBuf, StorageError> {
        validate_title(title).map_err(|e| e.with_backend(BACKEND))?;
        Ok(self.root.join(format!("{title}{PAGE_SUFFIX}")))
    }

    /// Write `body` to a temp file next to `path`, then rename it into place.
    fn write_atomic(&self, path: &Path, body: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.root)?;

        let mut file = tempfile::Builder::new()
            .prefix(".")
            .suffix(".tmp")
            .tempfile_in(&self.root)?;
        file.write_all(body)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PageStore for FsPageStore {
    fn load(&self, title: &str) -> Result<Vec<u8>, StorageError> {
        // Every read failure is reported as a missing page, bad titles included.
        let path = self.page_path(title).map_err(|mut e| {
            e.kind = StorageErrorKind::NotFound;
            e
        })?;
        fs::read(&path).map_err(|e| {
            StorageError::new(StorageErrorKind::NotFound)
                .with_title(title)
                .with_path(path.clone())
                .with_backend(BACKEND)
                .with_source(e)
        })
    }

    fn save(&self, title: &str, body: &[u8]) -> Result<(), StorageError> {
        let path = self.page_path(title)?;
        self.write_atomic(&path, body).map_err(|e| {
            StorageError::io(e, Some(path.clone()))
                .with_title(title)
                .with_backend(BACKEND)
        })?;
        tracing::debug!(title = %title, bytes = body.len(), "Saved page");
        Ok(())
    }

    fn delete(&self, title: &str) -> Result<(), StorageError> {
        if title == FRONT_PAGE {
            return Err(StorageError::protected(title).with_backend(BACKEND));
        }
        let path = self.page_path(title)?;
        fs::remove_file(&path).map_err(|e| {
            StorageError::io(e, Some(path.clone()))
                .with_title(title)
                .with_backend(BACKEND)
        })?;
        tracing::debug!(title = %title, "Deleted page");
        Ok(())
    }

    fn list_titles(&self) -> Result<Vec<String>, StorageError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root)
            .map_err(|e| StorageError::io(e, Some(self.root.clone())).with_backend(BACKEND))?;

        let mut titles: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|e| e.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .filter_map(|name| name.strip_suffix(PAGE_SUFFIX).map(str::to_owned))
            .filter(|title| !title.is_empty())
            .collect();

        titles.sort_unstable();
        Ok(titles)
    }
}
