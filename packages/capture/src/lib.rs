//! # Wirecraft Capture
//!
//! Image export for the wireframe page. The page is rendered to a
//! standalone HTML document (controls hidden), served once from a
//! disposable local server, and rasterized by headless Chrome at a fixed
//! output scale.
//!
//! The capture is fire-and-forget from the editor's perspective: a failure
//! here surfaces as an error for the host to show and never touches store
//! or history state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wirecraft_capture::{CaptureOptions, PageCapture};
//! use wirecraft_model::{Content, Section, TemplateKind, Variant, Viewport};
//! use std::path::PathBuf;
//!
//! let sections = vec![Section::new(
//!     TemplateKind::ContentCta,
//!     Variant::Light,
//!     Content::new(),
//! )];
//!
//! let capture = PageCapture::new(PathBuf::from("./exports")).unwrap();
//! let shot = capture
//!     .capture_page(&sections, Viewport::Desktop, &CaptureOptions::default())
//!     .unwrap();
//! println!("Captured: {}", shot.path.display());
//! ```

mod capture;
mod server;
mod types;

pub use capture::PageCapture;
pub use types::{CaptureOptions, Screenshot};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Nothing to capture: the page has no sections")]
    EmptyPage,

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser error: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, CaptureError>;
