//! Preview viewport
//!
//! The simulated device width class. Display-only: switching viewport never
//! changes stored content. The pixel dimensions feed the image-capture
//! collaborator.

use serde::{Deserialize, Serialize};

/// Viewport class for preview and capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Mobile: 375x667 (iPhone SE)
    Mobile,

    /// Tablet: 768x1024 (iPad)
    Tablet,

    /// Desktop: 1920x1080 (HD)
    Desktop,
}

impl Viewport {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Viewport::Mobile => (375, 667),
            Viewport::Tablet => (768, 1024),
            Viewport::Desktop => (1920, 1080),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Viewport::Mobile => "mobile",
            Viewport::Tablet => "tablet",
            Viewport::Desktop => "desktop",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "mobile" => Some(Viewport::Mobile),
            "tablet" => Some(Viewport::Tablet),
            "desktop" => Some(Viewport::Desktop),
            _ => None,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_serde_tags() {
        for viewport in [Viewport::Mobile, Viewport::Tablet, Viewport::Desktop] {
            let json = serde_json::to_string(&viewport).unwrap();
            assert_eq!(json, format!("\"{}\"", viewport.as_str()));
            assert_eq!(Viewport::from_tag(viewport.as_str()), Some(viewport));
        }
    }

    #[test]
    fn test_viewport_dimensions() {
        assert_eq!(Viewport::Desktop.dimensions(), (1920, 1080));
        assert_eq!(Viewport::Mobile.dimensions().0, 375);
    }
}
