//! Dynamic component loading behind a capability-resolution interface.
//!
//! The host never links against the forecaster component at compile time.
//! Instead, [`ComponentLoader`] opens the downloaded artifact and resolves
//! the small set of entry points the host needs; everything past that
//! boundary is opaque. The traits exist so the loading mechanism can be
//! substituted — the shipped implementation runs the artifact as a child
//! process speaking JSON-RPC 2.0 over stdin/stdout
//! ([`ProcessComponentLoader`]), and tests substitute in-process fakes.

mod process;

pub use process::ProcessComponentLoader;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{LoadError, StopError};

// ============================================================================
// Entry point names
// ============================================================================

// Method names the host resolves on the component. Configuration
// constants rather than strings scattered through call sites.

/// One-shot capability/version query, answered before construction.
pub const METHOD_DESCRIBE: &str = "describe";
/// Starts the constructed component server.
pub const METHOD_START: &str = "start";
/// Stops the running component server.
pub const METHOD_STOP: &str = "stop";
/// Returns the component's own process log as text.
pub const METHOD_PROCESS_LOG: &str = "get_process_log";

/// Capabilities the component must offer for a load to succeed.
pub const REQUIRED_METHODS: [&str; 3] = [METHOD_START, METHOD_STOP, METHOD_PROCESS_LOG];

// ============================================================================
// Traits
// ============================================================================

/// Opens an artifact and resolves the component's entry points.
#[async_trait]
pub trait ComponentLoader: Send + Sync {
    /// Load the artifact at `artifact` and resolve its entry points.
    ///
    /// Fails with [`LoadError::ArtifactMissing`] when no file exists at
    /// the path, and [`LoadError::EntryPointMissing`] when a required
    /// capability cannot be resolved. Does not construct or start
    /// anything.
    async fn load(&self, artifact: &Path) -> Result<Box<dyn LoadedComponent>, LoadError>;
}

/// A loaded component whose entry points have been resolved.
#[async_trait]
pub trait LoadedComponent: Send + Sync {
    /// Version string the component reported at load time.
    ///
    /// Empty when the component did not report one.
    fn version(&self) -> &str;

    /// Construct a component instance bound to `port`.
    async fn construct(&self, port: u16) -> Result<Arc<dyn ComponentHandle>, LoadError>;
}

/// A constructed, potentially running component instance.
#[async_trait]
pub trait ComponentHandle: Send + Sync {
    /// Invoke the component's start operation.
    async fn start(&self) -> Result<(), LoadError>;

    /// Invoke the component's stop operation and release the instance.
    async fn stop(&self) -> Result<(), StopError>;

    /// Retrieve the component's own process log text, verbatim.
    async fn process_log(&self) -> Result<String, LoadError>;
}
