//! CLI module — command parsing and dispatch
//!
//! All CLI logic lives here. `main.rs` calls `cli::run()`.

pub mod fetch;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "forecast-host")]
#[command(version)]
#[command(about = "Host process for the externally distributed forecaster component", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the host: fetch the artifact, start the component, serve the status page
    Serve,
    /// Download the component artifact and exit
    Fetch {
        /// Override the artifact URL from config
        #[arg(long)]
        url: Option<String>,
    },
    /// Show version information
    Version,
}

/// Entry point for the CLI — called from main().
pub async fn run() -> Result<()> {
    // Initialize logging from config; fall back to defaults if the config
    // file is missing or unreadable.
    let logging_cfg = forecast_host::config::Config::load()
        .map(|c| c.logging)
        .unwrap_or_default();
    forecast_host::logging::init_logging(&logging_cfg);

    let cli = Cli::parse();

    match cli.command {
        // Running the host is the default.
        None | Some(Commands::Serve) => {
            serve::cmd_serve().await?;
        }
        Some(Commands::Fetch { url }) => {
            fetch::cmd_fetch(url).await?;
        }
        Some(Commands::Version) => {
            cmd_version();
        }
    }

    Ok(())
}

/// Display version information
fn cmd_version() {
    println!("forecast-host {}", env!("CARGO_PKG_VERSION"));
}
