//! Markdown conversion and page templates for the wk wiki.
//!
//! This crate provides the two output collaborators used by the server:
//! - [`markdown`]: converts a raw page body to HTML with `pulldown-cmark`
//! - [`Templates`]: renders named templates with `minijinja`
//!
//! # Example
//!
//! ```
//! use wk_renderer::markdown;
//!
//! let html = markdown(b"**Bold** text");
//! assert_eq!(html, "<p><strong>Bold</strong> text</p>\n");
//! ```

mod markdown;
mod template;

pub use markdown::markdown;
pub use template::{RenderError, Templates};
