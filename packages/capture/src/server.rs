//! Disposable HTTP server for rendering the page
//!
//! This server is NOT a daemon. It:
//! - Starts on a random port
//! - Serves one HTML document
//! - Shuts down after capture

use crate::{CaptureError, Result};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use tiny_http::{Response, Server};

/// Disposable server that serves a single HTML document
pub struct RenderServer {
    server: Server,
    port: u16,
    html_content: String,
}

impl RenderServer {
    /// Create a new server on a random available port
    pub fn new(html_content: String) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").map_err(CaptureError::Io)?;
        let port = listener.local_addr().map_err(CaptureError::Io)?.port();

        let server = Server::from_listener(listener, None).map_err(|e| {
            CaptureError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                e.to_string(),
            ))
        })?;

        Ok(Self {
            server,
            port,
            html_content,
        })
    }

    /// Get the URL for accessing this server
    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Serve one request, then return
    pub fn serve_once(&self, timeout: Duration) -> Result<()> {
        if let Ok(Some(request)) = self.server.recv_timeout(timeout) {
            let response = Response::from_string(&self.html_content).with_header(
                tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"text/html; charset=UTF-8"[..],
                )
                .map_err(|_| CaptureError::Capture("invalid header".to_string()))?,
            );

            request.respond(response).map_err(|e| {
                CaptureError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    e.to_string(),
                ))
            })?;
        }

        Ok(())
    }
}

/// Start a disposable server and return its URL.
///
/// The server runs in a background thread and accepts one request.
pub fn start_disposable_server(html: String) -> Result<(String, thread::JoinHandle<()>)> {
    let server = RenderServer::new(html)?;
    let url = server.url();

    let handle = thread::spawn(move || {
        let _ = server.serve_once(Duration::from_secs(30));
    });

    Ok((url, handle))
}
