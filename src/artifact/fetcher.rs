//! HTTP artifact download.
//!
//! Best-effort, no retries, no checksum validation: a failed fetch is
//! logged by the caller, which then proceeds with whatever artifact is
//! already on disk.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::error::FetchError;

/// Read timeout for the artifact download.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads the component artifact over HTTP.
pub struct ArtifactFetcher {
    client: reqwest::Client,
}

impl ArtifactFetcher {
    /// Create a fetcher with a bounded read timeout and caching disabled.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("reqwest client"),
        }
    }

    /// Download `url` to `dest`, replacing any previous artifact.
    ///
    /// The body is streamed to a `.part` sibling first and renamed into
    /// place only on success, so a mid-stream failure leaves the previous
    /// artifact (if any) untouched.
    pub async fn fetch(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        debug!(url = %url, dest = %dest.display(), "Fetching component artifact");

        let resp = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let part = partial_path(dest);
        let result = write_body(resp, &part).await;
        if let Err(e) = result {
            let _ = tokio::fs::remove_file(&part).await;
            return Err(e);
        }

        tokio::fs::rename(&part, dest).await?;
        info!(dest = %dest.display(), "Downloaded latest component artifact");
        Ok(())
    }
}

impl Default for ArtifactFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Stream the response body to `part` in fixed-size chunks.
async fn write_body(resp: reqwest::Response, part: &Path) -> Result<(), FetchError> {
    let mut file = tokio::fs::File::create(part).await?;
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
    }
    file.flush().await?;
    Ok(())
}

/// `<dest>.part` in the same directory, so the final rename stays on one
/// filesystem.
fn partial_path(dest: &Path) -> std::path::PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}
