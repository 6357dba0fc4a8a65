//! Pages, identities, and page presentation for the wk wiki.
//!
//! This crate provides:
//! - [`Page`]: a titled body with an optional requester [`Account`]
//! - [`Site`]: page loading, saving, and deletion on top of a [`PageStore`]
//! - [`PageView`]: the serializable context handed to templates
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use wk_site::Site;
//! use wk_storage::FsPageStore;
//!
//! let site = Site::new(Arc::new(FsPageStore::new(PathBuf::from("data"))));
//!
//! if let Some(page) = site.load_page("FrontPage") {
//!     let view = site.present(&page);
//!     assert!(view.is_front_page);
//! }
//! ```
//!
//! [`PageStore`]: wk_storage::PageStore

mod page;
mod site;
mod view;

pub use page::{Account, Page};
pub use site::Site;
pub use view::{PageSummary, PageView};
pub use wk_storage::FRONT_PAGE;
