//! `fetch` command — one-shot artifact download.

use anyhow::{Context, Result};

use forecast_host::artifact::{ArtifactFetcher, ArtifactStore};
use forecast_host::config::Config;

/// Download the component artifact to its configured location and exit.
pub async fn cmd_fetch(url: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let url = url.unwrap_or_else(|| config.artifact.url.clone());

    let store = ArtifactStore::new(config.artifact_dir(), config.artifact.filename.clone());
    let dest = store.location();

    println!("Fetching {} ...", url);
    ArtifactFetcher::new()
        .fetch(&url, &dest)
        .await
        .with_context(|| format!("Failed to download artifact from {}", url))?;

    println!("Saved to {}", dest.display());
    Ok(())
}
