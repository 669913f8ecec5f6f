//! Document-generation link
//!
//! The document exporter never calls the network directly. It packs the
//! outline into a URL the host opens in a new tab; the external endpoint
//! decodes the payload, builds the document, and redirects to it. Routing
//! the payload through a GET parameter sidesteps cross-origin restrictions
//! entirely.

use crate::{outline_sections, ExportError, SectionOutline};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use wirecraft_model::Section;

// TODO: point this at the production deployment once the script is published
const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/DEPLOYMENT_ID/exec";

/// The external document-generation endpoint
#[derive(Debug, Clone)]
pub struct DocEndpoint {
    pub url: String,
}

impl DocEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for DocEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// The payload the endpoint decodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocExportRequest {
    pub title: String,
    pub content: Vec<SectionOutline>,
}

/// Build the document payload for the current sections
pub fn doc_export_request(sections: &[Section]) -> DocExportRequest {
    DocExportRequest {
        title: format!(
            "Landing Page Wireframe - {}",
            chrono::Utc::now().format("%Y-%m-%d")
        ),
        content: outline_sections(sections),
    }
}

/// Encode the payload into a navigable URL.
///
/// The JSON is URL-encoded first and base64-encoded second; the endpoint
/// reverses the two steps before parsing.
pub fn doc_export_url(
    endpoint: &DocEndpoint,
    request: &DocExportRequest,
) -> Result<String, ExportError> {
    let json = serde_json::to_string(request)?;
    let encoded = urlencoding::encode(&json);
    let payload = STANDARD.encode(encoded.as_bytes());
    tracing::debug!(bytes = payload.len(), "built document export link");
    Ok(format!("{}?data={}", endpoint.url, payload))
}
