//! forecast-host - Host process for the externally distributed forecaster component

pub mod artifact;
pub mod component;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod status;

pub use artifact::{ArtifactFetcher, ArtifactStore};
pub use component::{ComponentHandle, ComponentLoader, LoadedComponent, ProcessComponentLoader};
pub use config::Config;
pub use error::{HostError, Result};
pub use lifecycle::{LifecycleController, LifecycleState, StartupLog};
