//! Flat-file page storage for the wk wiki.
//!
//! This crate provides a [`PageStore`] trait that maps page titles to raw body
//! bytes. Every page lives in its own file, `<root>/<title>.txt`, with no header
//! or metadata.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`PageStore`] trait with `load()`, `save()`, `delete()`, and `list_titles()`
//! - [`FsPageStore`] for the filesystem, writing through a temp file and rename
//! - [`MockPageStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wk_storage::{FsPageStore, PageStore};
//!
//! let store = FsPageStore::new(PathBuf::from("data"));
//! store.save("MyPage", b"Hello")?;
//! assert_eq!(store.load("MyPage")?, b"Hello");
//! ```

mod fs;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use fs::FsPageStore;
#[cfg(feature = "mock")]
pub use mock::MockPageStore;
pub use storage::{FRONT_PAGE, PAGE_SUFFIX, PageStore, StorageError, StorageErrorKind};
