//! HTTP status server.
//!
//! Serves a human-readable status page showing the component version, the
//! host startup log, and the component's own process log, plus a small
//! JSON health endpoint. Uses raw TCP + manual HTTP to avoid adding a web
//! framework dependency for two endpoints.
//!
//! The page is assembled fresh per request from live controller state, so
//! it keeps working whether the component is running, failed to start, or
//! was never loaded at all.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::lifecycle::LifecycleController;

// ============================================================================
// Status server
// ============================================================================

/// Start the HTTP status server.
///
/// Serves:
/// - `GET /` → 200 with an HTML status page
/// - `GET /health` → 200 with JSON body `{"status":"ok","state":"...","version":"..."}`
/// - Anything else → 404
///
/// Returns a `JoinHandle` so callers can abort on shutdown.
pub async fn start_status_server(
    host: &str,
    port: u16,
    controller: Arc<LifecycleController>,
) -> std::io::Result<tokio::task::JoinHandle<()>> {
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Status server listening on http://{}", addr);

    let handle = tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut stream, _addr)) => {
                    let controller = Arc::clone(&controller);
                    tokio::spawn(async move {
                        let mut buf = [0u8; 512];
                        let n = match tokio::time::timeout(
                            Duration::from_secs(5),
                            tokio::io::AsyncReadExt::read(&mut stream, &mut buf),
                        )
                        .await
                        {
                            Ok(Ok(n)) => n,
                            _ => return,
                        };

                        let request = String::from_utf8_lossy(&buf[..n]);
                        let request_line = request.lines().next().unwrap_or_default();
                        let mut parts = request_line.split_whitespace();
                        let method = parts.next().unwrap_or_default();
                        let raw_path = parts.next().unwrap_or_default();
                        let path = raw_path.split('?').next().unwrap_or(raw_path);

                        let (status_line, content_type, body) = match (method, path) {
                            ("GET", "/") => (
                                "200 OK",
                                "text/html; charset=utf-8",
                                render_status_page(&controller).await,
                            ),
                            ("GET", "/health") => (
                                "200 OK",
                                "application/json",
                                format!(
                                    "{{\"status\":\"ok\",\"state\":\"{}\",\"version\":\"{}\"}}",
                                    controller.state().as_str(),
                                    controller.version().replace('"', "\\\"")
                                ),
                            ),
                            _ => (
                                "404 Not Found",
                                "application/json",
                                "{\"error\":\"not_found\"}".to_string(),
                            ),
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line,
                            content_type,
                            body.len(),
                            body
                        );

                        let _ = stream.write_all(response.as_bytes()).await;
                        let _ = stream.shutdown().await;
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Status server accept error");
                }
            }
        }
    });

    Ok(handle)
}

// ============================================================================
// Page rendering
// ============================================================================

async fn render_status_page(controller: &LifecycleController) -> String {
    let version = controller.version();
    let state = controller.state();
    let startup_log = controller.startup_log().render();
    let component_log = controller.component_log().await;

    format!(
        "<!DOCTYPE html>\n\
         <html><head><title>Forecast Host</title></head><body>\n\
         <h1>Forecast Host</h1>\n\
         <p>Forecast server version: {}</p>\n\
         <p>State: {}</p>\n\
         <h2>Host startup log</h2>\n<pre>{}</pre>\n\
         <h2>Forecast server log</h2>\n<pre>{}</pre>\n\
         </body></html>\n",
        html_escape(&version),
        state.as_str(),
        html_escape(&startup_log),
        html_escape(&component_log)
    )
}

/// Minimal escaping for text rendered inside `<pre>` blocks; log lines may
/// quote arbitrary component output.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ============================================================================
// Tests
// ============================================================================
