//! Page rasterization using headless Chrome

use crate::server::start_disposable_server;
use crate::types::{capture_file_name, CaptureOptions, Screenshot};
use crate::{CaptureError, Result};
use headless_chrome::{Browser, LaunchOptions};
use std::path::PathBuf;
use wirecraft_model::{Section, Viewport};
use wirecraft_renderer::{render_page, RenderOptions};

/// Main capture interface
pub struct PageCapture {
    output_dir: PathBuf,
    browser: Browser,
}

impl PageCapture {
    /// Create a capture instance with its own headless Chrome
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&output_dir).map_err(CaptureError::Io)?;

        let browser = Browser::new(LaunchOptions {
            headless: true,
            window_size: Some((1920, 1080)),
            ..Default::default()
        })
        .map_err(|e| CaptureError::Browser(e.to_string()))?;

        Ok(Self {
            output_dir,
            browser,
        })
    }

    /// Render the sections at the given viewport and write a dated PNG.
    ///
    /// Controls and drag handles are hidden in the capture; the output shows
    /// content only.
    pub fn capture_page(
        &self,
        sections: &[Section],
        viewport: Viewport,
        options: &CaptureOptions,
    ) -> Result<Screenshot> {
        if sections.is_empty() {
            return Err(CaptureError::EmptyPage);
        }

        let html = render_page(
            sections,
            viewport,
            &RenderOptions {
                show_controls: false,
            },
        );

        let (url, server_handle) = start_disposable_server(html)?;

        let tab = self
            .browser
            .new_tab()
            .map_err(|e| CaptureError::Browser(e.to_string()))?;

        let (width, height) = viewport.dimensions();
        tab.set_bounds(headless_chrome::types::Bounds::Normal {
            left: Some(0),
            top: Some(0),
            width: Some(width as f64),
            height: Some(height as f64),
        })
        .map_err(|e| CaptureError::Browser(e.to_string()))?;

        tab.navigate_to(&url)
            .map_err(|e| CaptureError::Browser(e.to_string()))?;
        tab.wait_until_navigated()
            .map_err(|e| CaptureError::Browser(e.to_string()))?;

        let screenshot_data = self.capture_page_bounds(&tab, options)?;

        let output_path = self.output_dir.join(capture_file_name());
        std::fs::write(&output_path, &screenshot_data).map_err(CaptureError::Io)?;
        tracing::info!(path = %output_path.display(), "wrote page capture");

        tab.close(true)
            .map_err(|e| CaptureError::Browser(e.to_string()))?;
        let _ = server_handle.join();

        Ok(Screenshot {
            path: output_path,
            width,
            height,
            viewport,
            timestamp: chrono::Utc::now().to_rfc3339(),
        })
    }

    /// Rasterize the wireframe container's bounding box at the output scale
    fn capture_page_bounds(
        &self,
        tab: &headless_chrome::Tab,
        options: &CaptureOptions,
    ) -> Result<Vec<u8>> {
        tab.wait_for_element("[data-wireframe-root]")
            .map_err(|e| CaptureError::Capture(e.to_string()))?;

        // Bounding box via JavaScript is more reliable than box_model here
        let script = r#"
            const el = document.querySelector('[data-wireframe-root]');
            const rect = el.getBoundingClientRect();
            JSON.stringify({
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height
            });
        "#;

        let bounds_json = tab
            .evaluate(script, false)
            .map_err(|e| CaptureError::Capture(e.to_string()))?
            .value
            .ok_or_else(|| CaptureError::Capture("Failed to get bounding box".to_string()))?;

        let bounds: serde_json::Value = serde_json::from_str(
            bounds_json
                .as_str()
                .ok_or_else(|| CaptureError::Capture("Invalid bounds JSON".to_string()))?,
        )
        .map_err(|e| CaptureError::Capture(e.to_string()))?;

        let x = bounds["x"].as_f64().unwrap_or(0.0);
        let y = bounds["y"].as_f64().unwrap_or(0.0);
        let width = bounds["width"].as_f64().unwrap_or(100.0);
        let height = bounds["height"].as_f64().unwrap_or(100.0);

        let screenshot_data = tab
            .capture_screenshot(
                headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption::Png,
                None,
                Some(headless_chrome::protocol::cdp::Page::Viewport {
                    x,
                    y,
                    width,
                    height,
                    scale: options.scale,
                }),
                true,
            )
            .map_err(|e| CaptureError::Capture(e.to_string()))?;

        Ok(screenshot_data)
    }
}
