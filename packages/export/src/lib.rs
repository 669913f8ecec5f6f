//! # Wirecraft Export
//!
//! The three ways a page leaves the editor:
//!
//! - **JSON file**: versioned, timestamped snapshot of the section list for
//!   save/restore. Import validates section types against the catalog and
//!   coerces lenient fields rather than crashing on partially-valid input.
//! - **Document outline**: sections flattened to label/value rows, encoded
//!   into a link for an external document-generation endpoint.
//! - **Image**: handled by the capture crate, which renders through the
//!   renderer and rasterizes externally.
//!
//! Import failure is atomic: either every section validates and the caller
//! replaces its state, or the error surfaces and prior state is untouched.

mod doc_link;
mod json;
mod outline;

pub use doc_link::{doc_export_request, doc_export_url, DocEndpoint, DocExportRequest};
pub use json::{export_file_name, export_json, import_json, WireframeFile, WireframeImport, FORMAT_VERSION};
pub use outline::{outline_sections, OutlineItem, SectionOutline};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Invalid section type: {0}")]
    UnknownSectionType(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
