//! Error types for forecast-host
//!
//! This module defines all error types used throughout the host. Uses
//! `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.
//!
//! The taxonomy mirrors the failure policy of the bootstrap layer: every
//! variant here ends in a log entry and a well-defined lifecycle state,
//! never in an unhandled fault escaping to the host process.

use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Artifact fetch errors
// ============================================================================

/// Network or I/O failure while fetching the component artifact.
///
/// Fetch failures are non-fatal by policy: the caller logs them and
/// proceeds with whatever artifact is already on disk.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request itself failed (connect, timeout, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),

    /// Writing the downloaded body to disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Component load errors
// ============================================================================

/// Dynamic loading could not find the artifact or a required capability.
///
/// Load failures leave the host running with no active component.
#[derive(Error, Debug)]
pub enum LoadError {
    /// No file exists at the resolved artifact path.
    #[error("component artifact not found at {0}")]
    ArtifactMissing(PathBuf),

    /// A required entry point could not be resolved on the component.
    #[error("component entry point missing: {0}")]
    EntryPointMissing(String),

    /// The artifact could not be executed at all.
    #[error("failed to spawn component: {0}")]
    Spawn(String),

    /// The component spoke something other than the expected protocol.
    #[error("component protocol error: {0}")]
    Protocol(String),
}

// ============================================================================
// Lifecycle errors
// ============================================================================

/// A lifecycle operation could not complete.
///
/// "Already running" is deliberately absent: a second `start()` is a
/// benign logged no-op, not an error to the caller.
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// `start()` was attempted with no artifact present on disk.
    #[error("no component artifact present at {0}")]
    ArtifactNotFound(PathBuf),

    /// Loading or constructing the component failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The component's start operation signaled failure.
    #[error("component start failed: {0}")]
    StartFailed(String),
}

/// The component's own stop operation failed internally.
///
/// Caught and logged by the lifecycle controller; the state still
/// transitions to `Stopped` since the host cannot keep an unstoppable
/// handle alive.
#[derive(Error, Debug)]
#[error("component stop invocation failed: {0}")]
pub struct StopError(pub String);

// ============================================================================
// Primary error type
// ============================================================================

/// The primary error type for forecast-host operations.
#[derive(Error, Debug)]
pub enum HostError {
    /// Configuration-related errors (invalid config, bad values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Artifact fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Component load errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Lifecycle controller errors
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for forecast-host operations.
pub type Result<T> = std::result::Result<T, HostError>;
