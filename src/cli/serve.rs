//! `serve` command — run the host until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};

use forecast_host::component::ProcessComponentLoader;
use forecast_host::config::Config;
use forecast_host::lifecycle::LifecycleController;
use forecast_host::status::start_status_server;

/// Fetch the artifact, start the component, serve the status page, and
/// shut the component down on Ctrl+C.
pub async fn cmd_serve() -> Result<()> {
    let config = Config::load()?;

    let loader = ProcessComponentLoader::new(config.component.call_timeout_secs);
    let controller = Arc::new(LifecycleController::new(&config, Box::new(loader)));

    controller.initialize().await;

    // A component that fails to start is not fatal: the status page stays
    // up and shows the accumulated diagnostics.
    if let Err(e) = controller.start().await {
        error!(error = %e, "Component did not start; status page remains available");
    }

    let status_handle = start_status_server(
        &config.status.host,
        config.status.port,
        Arc::clone(&controller),
    )
    .await
    .with_context(|| {
        format!(
            "Failed to bind status server on {}:{}",
            config.status.host, config.status.port
        )
    })?;

    println!(
        "Forecast host is running on http://{}:{}. Press Ctrl+C to stop.",
        config.status.host, config.status.port
    );

    // Wait for Ctrl+C
    tokio::signal::ctrl_c()
        .await
        .with_context(|| "Failed to listen for Ctrl+C")?;

    println!();
    println!("Shutting down...");
    info!("Shutdown signal received");

    controller.run_termination_hook().await;
    status_handle.abort();

    Ok(())
}
