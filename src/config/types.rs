//! Configuration type definitions for forecast-host
//!
//! All types implement serde traits for JSON serialization and have
//! sensible defaults, so a missing or partial config file still yields a
//! usable configuration. The configuration is immutable after load: the
//! lifecycle controller receives a snapshot at construction and never
//! writes back.

use serde::{Deserialize, Serialize};

/// Main configuration struct for forecast-host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the component artifact comes from and where it lives on disk
    pub artifact: ArtifactConfig,
    /// Component instance settings (port, call timeout)
    pub component: ComponentConfig,
    /// Status page server configuration
    pub status: StatusConfig,
    /// Logging format and level
    pub logging: LoggingConfig,
}

// ============================================================================
// Artifact Configuration
// ============================================================================

/// Artifact source and on-disk layout.
///
/// Legacy deployments of the forecaster used distinct fixed filenames per
/// product variant; both the URL and the filename are plain configuration
/// here so one host binary serves every deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// URL the packaged component artifact is downloaded from.
    pub url: String,
    /// Directory the artifact is placed in. Defaults to the process
    /// working directory when unset.
    pub dir: Option<String>,
    /// Fixed artifact filename inside `dir`.
    pub filename: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            url: "http://software.forecasttester.org/forecaster-server.bin".to_string(),
            dir: None,
            filename: "forecaster-server.bin".to_string(),
        }
    }
}

// ============================================================================
// Component Configuration
// ============================================================================

/// Settings for the single component instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    /// Port the component server is constructed with.
    pub port: u16,
    /// Timeout in seconds for a single call into the component
    /// (start, stop, log retrieval).
    pub call_timeout_secs: u64,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            port: 6708,
            call_timeout_secs: 30,
        }
    }
}

// ============================================================================
// Status Server Configuration
// ============================================================================

/// Status page HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Address to bind the status server to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Compact human-readable text.
    Compact,
    /// Structured JSON lines for log aggregators.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Default level filter when `RUST_LOG` is unset.
    pub level: String,
    /// Optional log file; stderr when unset.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            level: "info".to_string(),
            file: None,
        }
    }
}
