//! Capture options and results

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wirecraft_model::Viewport;

/// Options for a page capture
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Device pixel ratio of the output (2.0 = retina-quality export)
    pub scale: f64,

    /// Seconds to wait for the page to settle before rasterizing
    pub timeout_secs: u64,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            timeout_secs: 30,
        }
    }
}

/// Result of a page capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screenshot {
    /// Output file path
    pub path: PathBuf,

    /// Image width in CSS pixels (before scaling)
    pub width: u32,

    /// Image height in CSS pixels (before scaling)
    pub height: u32,

    /// Viewport used for capture
    pub viewport: Viewport,

    /// Timestamp of capture
    pub timestamp: String,
}

/// Dated download name for an image export, e.g. `wireframe-2026-08-06.png`
pub fn capture_file_name() -> String {
    format!("wireframe-{}.png", chrono::Utc::now().format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_is_retina() {
        let options = CaptureOptions::default();
        assert_eq!(options.scale, 2.0);
    }

    #[test]
    fn test_capture_file_name_is_dated() {
        let name = capture_file_name();
        assert!(name.starts_with("wireframe-"));
        assert!(name.ends_with(".png"));
    }
}
