//! Single-instance lifecycle control for the forecaster component.
//!
//! The [`LifecycleController`] owns the one component instance a host
//! process may run: it fetches the artifact (best effort), loads it,
//! constructs and starts it, and stops it exactly once on shutdown. It is
//! an explicit object owned by the composition root — there is no hidden
//! global state — and it is handed by reference to whatever exposes the
//! status endpoint.
//!
//! Every failure path here ends in a startup-log entry and a well-defined
//! state. The host keeps serving status requests even when the component
//! never starts.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use crate::artifact::{ArtifactFetcher, ArtifactStore};
use crate::component::{ComponentHandle, ComponentLoader};
use crate::config::Config;
use crate::error::LifecycleError;

/// Message returned by [`LifecycleController::component_log`] when no
/// component instance exists.
pub const LOG_NOT_AVAILABLE: &str = "Forecaster server not available.";

// ============================================================================
// LifecycleState
// ============================================================================

/// Where the single component instance is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Nothing has happened yet.
    Uninitialized,
    /// Artifact fetch attempted (successfully or not).
    Downloading,
    /// Component constructed but not yet started.
    Loaded,
    /// Component start returned without signaling failure.
    Running,
    /// Component stopped; the handle is gone.
    Stopped,
    /// The component's start operation failed.
    Failed,
}

impl LifecycleState {
    /// Lowercase name for logs and the status page.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Uninitialized => "uninitialized",
            LifecycleState::Downloading => "downloading",
            LifecycleState::Loaded => "loaded",
            LifecycleState::Running => "running",
            LifecycleState::Stopped => "stopped",
            LifecycleState::Failed => "failed",
        }
    }
}

// ============================================================================
// StartupLog
// ============================================================================

/// Append-only host startup log, accumulated for the process lifetime.
///
/// Never truncated; read concurrently by status queries while lifecycle
/// operations append.
#[derive(Default)]
pub struct StartupLog {
    lines: RwLock<Vec<String>>,
}

impl StartupLog {
    /// Append one line.
    pub fn push(&self, line: impl Into<String>) {
        self.lines.write().unwrap().push(line.into());
    }

    /// All accumulated lines joined with newlines.
    pub fn render(&self) -> String {
        self.lines.read().unwrap().join("\n")
    }

    /// Number of accumulated lines.
    pub fn len(&self) -> usize {
        self.lines.read().unwrap().len()
    }

    /// Whether nothing has been logged yet.
    pub fn is_empty(&self) -> bool {
        self.lines.read().unwrap().is_empty()
    }
}

// ============================================================================
// LifecycleController
// ============================================================================

/// Orchestrates fetch → load → construct → start for the single
/// component instance, and stops it on host shutdown.
///
/// Mutating operations (`initialize`, `start`, `stop`) are serialized by
/// one async mutex. Read queries (`component_log`, `version`, `state`)
/// snapshot the handle under a short read lock, then call into the
/// component outside it so a slow component never blocks status queries.
pub struct LifecycleController {
    store: ArtifactStore,
    fetcher: ArtifactFetcher,
    loader: Box<dyn ComponentLoader>,
    artifact_url: String,
    port: u16,

    /// Serializes the mutating lifecycle operations.
    mutation_lock: tokio::sync::Mutex<()>,
    /// Current state; readable without touching the mutation lock.
    state: RwLock<LifecycleState>,
    /// The single component handle; `Some` implies Loaded or Running.
    handle: RwLock<Option<Arc<dyn ComponentHandle>>>,
    /// Cached component version; empty until successfully extracted.
    version: RwLock<String>,
    /// Host startup diagnostics, independent of the component's own log.
    startup_log: StartupLog,

    /// Set once, on the first successful start.
    hook_registered: AtomicBool,
    /// The termination hook runs stop at most once, even if the platform
    /// invokes it more than once.
    stop_invoked: AtomicBool,
}

impl LifecycleController {
    /// Build a controller from configuration and a loader implementation.
    pub fn new(config: &Config, loader: Box<dyn ComponentLoader>) -> Self {
        Self {
            store: ArtifactStore::new(config.artifact_dir(), config.artifact.filename.clone()),
            fetcher: ArtifactFetcher::new(),
            loader,
            artifact_url: config.artifact.url.clone(),
            port: config.component.port,
            mutation_lock: tokio::sync::Mutex::new(()),
            state: RwLock::new(LifecycleState::Uninitialized),
            handle: RwLock::new(None),
            version: RwLock::new(String::new()),
            startup_log: StartupLog::default(),
            hook_registered: AtomicBool::new(false),
            stop_invoked: AtomicBool::new(false),
        }
    }

    fn log(&self, line: impl Into<String>) {
        let line = line.into();
        info!("{}", line);
        self.startup_log.push(line);
    }

    fn set_state(&self, next: LifecycleState) {
        let mut state = self.state.write().unwrap();
        debug!(from = state.as_str(), to = next.as_str(), "Lifecycle transition");
        *state = next;
    }

    /// Fetch the artifact, best effort. Failure is logged and swallowed:
    /// whatever artifact is already on disk will be used.
    pub async fn initialize(&self) {
        let _guard = self.mutation_lock.lock().await;
        self.set_state(LifecycleState::Downloading);

        self.log(format!(
            "Will look for forecaster software at this URL: {}",
            self.artifact_url
        ));

        let dest = self.store.location();
        match self.fetcher.fetch(&self.artifact_url, &dest).await {
            Ok(()) => self.log(format!(
                "Downloaded latest forecaster software and saved here: {}",
                dest.display()
            )),
            Err(e) => {
                warn!(error = %e, "Artifact fetch failed (non-fatal)");
                self.log(format!("Unable to download forecaster software: {}", e));
            }
        }
    }

    /// Load, construct and start the component instance.
    ///
    /// A second call while an instance exists is a logged no-op, not an
    /// error. A missing artifact is reported as
    /// [`LifecycleError::ArtifactNotFound`] with state unchanged — the
    /// host must keep serving other requests.
    pub async fn start(&self) -> Result<(), LifecycleError> {
        let _guard = self.mutation_lock.lock().await;

        if self.handle.read().unwrap().is_some() {
            self.log("Forecaster software is already running");
            return Ok(());
        }

        let location = self.store.location();
        if !self.store.is_present() {
            self.log("Unable to start the forecaster");
            self.log(format!(
                "  + forecaster artifact does not exist or could not be found at {}",
                location.display()
            ));
            return Err(LifecycleError::ArtifactNotFound(location));
        }

        let loaded = match self.loader.load(&location).await {
            Ok(loaded) => loaded,
            Err(e) => {
                self.log(format!("Unable to load forecaster: {}", e));
                return Err(e.into());
            }
        };

        let handle = match loaded.construct(self.port).await {
            Ok(handle) => handle,
            Err(e) => {
                self.log(format!("Unable to construct forecaster instance: {}", e));
                return Err(e.into());
            }
        };
        self.log(format!("Will start forecast server on port: {}", self.port));

        *self.handle.write().unwrap() = Some(Arc::clone(&handle));
        self.set_state(LifecycleState::Loaded);

        if let Err(e) = handle.start().await {
            self.log(format!("Unable to start forecaster: {}", e));
            if let Err(stop_err) = handle.stop().await {
                warn!(error = %stop_err, "Cleanup stop after failed start also failed");
            }
            *self.handle.write().unwrap() = None;
            self.set_state(LifecycleState::Failed);
            return Err(LifecycleError::StartFailed(e.to_string()));
        }
        self.set_state(LifecycleState::Running);
        self.log("Forecaster started");

        if !self.hook_registered.swap(true, Ordering::SeqCst) {
            self.log("Registered process termination hook");
        }

        let version = loaded.version();
        if version.is_empty() {
            self.log("Unable to get forecaster version");
        } else {
            *self.version.write().unwrap() = version.to_string();
        }

        Ok(())
    }

    /// Stop the component instance. No-op when none exists.
    ///
    /// A failure from the component's own stop operation is caught and
    /// logged, never propagated: stop must never prevent host shutdown
    /// from completing. The state transitions to `Stopped` and the handle
    /// is cleared regardless — the host cannot keep an unstoppable handle
    /// alive, though the underlying process may leak (see DESIGN notes).
    pub async fn stop(&self) {
        let _guard = self.mutation_lock.lock().await;

        let handle = self.handle.write().unwrap().take();
        let Some(handle) = handle else {
            return;
        };

        self.log("Shutting down forecast server");
        match handle.stop().await {
            Ok(()) => self.log("Shutdown command invoked"),
            Err(e) => {
                warn!(error = %e, "Component stop failed; continuing shutdown");
                self.log(format!("Forecaster stop failed: {}", e));
            }
        }
        self.set_state(LifecycleState::Stopped);
    }

    /// Process-termination hook body: runs [`Self::stop`] at most once,
    /// no matter how many times the platform invokes it, and tolerates
    /// being invoked when `start()` never completed.
    pub async fn run_termination_hook(&self) {
        if self.stop_invoked.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("Host process is being shut down");
        self.stop().await;
    }

    /// Whether a termination hook has been registered (it is, exactly
    /// once, on the first successful start).
    pub fn termination_hook_registered(&self) -> bool {
        self.hook_registered.load(Ordering::SeqCst)
    }

    /// The component's own process log, verbatim.
    ///
    /// Returns a fixed not-available message when no instance exists, and
    /// a diagnostic string when log retrieval itself fails.
    pub async fn component_log(&self) -> String {
        let handle = self.handle.read().unwrap().clone();
        match handle {
            Some(handle) => match handle.process_log().await {
                Ok(log) => log,
                Err(e) => format!("Unable to get log from forecast server: {}", e),
            },
            None => LOG_NOT_AVAILABLE.to_string(),
        }
    }

    /// Cached component version; empty until successfully extracted.
    pub fn version(&self) -> String {
        self.version.read().unwrap().clone()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        *self.state.read().unwrap()
    }

    /// The accumulated host startup log.
    pub fn startup_log(&self) -> &StartupLog {
        &self.startup_log
    }

    /// Resolved artifact location (for diagnostics).
    pub fn artifact_location(&self) -> PathBuf {
        self.store.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;

    use crate::component::LoadedComponent;
    use crate::error::{LoadError, StopError};

    // ---- In-process fakes (the loader trait is the substitution seam) ----

    #[derive(Default)]
    struct FakeBehavior {
        fail_load: Option<&'static str>,
        fail_start: bool,
        fail_stop: bool,
        fail_log: bool,
        version: &'static str,
        log_text: &'static str,
    }

    struct FakeLoader {
        behavior: FakeBehavior,
        constructed: Arc<AtomicUsize>,
        stops: Arc<AtomicUsize>,
    }

    impl FakeLoader {
        fn new(behavior: FakeBehavior) -> Self {
            Self {
                behavior,
                constructed: Arc::new(AtomicUsize::new(0)),
                stops: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    struct FakeLoaded {
        version: &'static str,
        log_text: &'static str,
        fail_start: bool,
        fail_stop: bool,
        fail_log: bool,
        constructed: Arc<AtomicUsize>,
        stops: Arc<AtomicUsize>,
    }

    struct FakeHandle {
        log_text: &'static str,
        fail_start: bool,
        fail_stop: bool,
        fail_log: bool,
        stops: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ComponentLoader for FakeLoader {
        async fn load(&self, artifact: &Path) -> Result<Box<dyn LoadedComponent>, LoadError> {
            if !artifact.is_file() {
                return Err(LoadError::ArtifactMissing(artifact.to_path_buf()));
            }
            if let Some(name) = self.behavior.fail_load {
                return Err(LoadError::EntryPointMissing(name.to_string()));
            }
            Ok(Box::new(FakeLoaded {
                version: self.behavior.version,
                log_text: self.behavior.log_text,
                fail_start: self.behavior.fail_start,
                fail_stop: self.behavior.fail_stop,
                fail_log: self.behavior.fail_log,
                constructed: Arc::clone(&self.constructed),
                stops: Arc::clone(&self.stops),
            }))
        }
    }

    #[async_trait]
    impl LoadedComponent for FakeLoaded {
        fn version(&self) -> &str {
            self.version
        }

        async fn construct(&self, _port: u16) -> Result<Arc<dyn ComponentHandle>, LoadError> {
            self.constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(FakeHandle {
                log_text: self.log_text,
                fail_start: self.fail_start,
                fail_stop: self.fail_stop,
                fail_log: self.fail_log,
                stops: Arc::clone(&self.stops),
            }))
        }
    }

    #[async_trait]
    impl ComponentHandle for FakeHandle {
        async fn start(&self) -> Result<(), LoadError> {
            if self.fail_start {
                return Err(LoadError::Protocol("start refused".into()));
            }
            Ok(())
        }

        async fn stop(&self) -> Result<(), StopError> {
            self.stops.fetch_add(1, Ordering::SeqCst);
            if self.fail_stop {
                return Err(StopError("stop refused".into()));
            }
            Ok(())
        }

        async fn process_log(&self) -> Result<String, LoadError> {
            if self.fail_log {
                return Err(LoadError::Protocol("log pipe broken".into()));
            }
            Ok(self.log_text.to_string())
        }
    }

    // ---- Test harness ----

    fn test_config(dir: &Path, url: &str) -> Config {
        let mut config = Config::default();
        config.artifact.dir = Some(dir.to_string_lossy().into_owned());
        config.artifact.filename = "forecaster.bin".to_string();
        config.artifact.url = url.to_string();
        config
    }

    fn controller_with(
        dir: &Path,
        behavior: FakeBehavior,
    ) -> (LifecycleController, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let loader = FakeLoader::new(behavior);
        let constructed = Arc::clone(&loader.constructed);
        let stops = Arc::clone(&loader.stops);
        let config = test_config(dir, "http://127.0.0.1:9/unused");
        (
            LifecycleController::new(&config, Box::new(loader)),
            constructed,
            stops,
        )
    }

    fn place_artifact(dir: &Path) {
        std::fs::write(dir.join("forecaster.bin"), b"fake artifact").unwrap();
    }

    fn working_behavior() -> FakeBehavior {
        FakeBehavior {
            version: "2.7.1",
            log_text: "forecast engine ready",
            ..Default::default()
        }
    }

    // ---- P1: idempotent stop ----

    #[tokio::test]
    async fn test_stop_without_handle_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _, stops) = controller_with(dir.path(), working_behavior());

        controller.stop().await;
        controller.stop().await;
        controller.stop().await;

        assert_eq!(controller.state(), LifecycleState::Uninitialized);
        assert_eq!(stops.load(Ordering::SeqCst), 0);
        assert!(controller.startup_log().is_empty());
    }

    // ---- P2: single instance ----

    #[tokio::test]
    async fn test_second_start_is_benign_noop() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let (controller, constructed, _) = controller_with(dir.path(), working_behavior());

        controller.start().await.unwrap();
        controller.start().await.unwrap();

        assert_eq!(constructed.load(Ordering::SeqCst), 1);
        assert!(controller
            .startup_log()
            .render()
            .contains("already running"));
    }

    // ---- P3: fetch non-fatal, missing artifact reported ----

    #[tokio::test]
    async fn test_start_without_artifact_fails_and_state_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, constructed, _) = controller_with(dir.path(), working_behavior());

        let err = controller.start().await.err().unwrap();
        assert!(matches!(err, LifecycleError::ArtifactNotFound(_)));
        assert_eq!(controller.state(), LifecycleState::Uninitialized);
        assert_eq!(constructed.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_then_preexisting_artifact_used() {
        // Unreachable URL, but an artifact is already on disk: start
        // proceeds with it.
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let loader = FakeLoader::new(working_behavior());
        let config = test_config(dir.path(), &format!("http://{}", addr));
        let controller = LifecycleController::new(&config, Box::new(loader));

        controller.initialize().await;
        assert_eq!(controller.state(), LifecycleState::Downloading);
        assert!(controller
            .startup_log()
            .render()
            .contains("Unable to download"));

        controller.start().await.unwrap();
        assert_eq!(controller.state(), LifecycleState::Running);
    }

    // Scenario B: unreachable URL and no pre-existing artifact.
    #[tokio::test]
    async fn test_fetch_failure_without_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let loader = FakeLoader::new(working_behavior());
        let config = test_config(dir.path(), &format!("http://{}", addr));
        let controller = LifecycleController::new(&config, Box::new(loader));

        controller.initialize().await;
        let err = controller.start().await.err().unwrap();
        assert!(matches!(err, LifecycleError::ArtifactNotFound(_)));
        assert_eq!(controller.state(), LifecycleState::Downloading);

        // Diagnostic log: fetch failure entry, then artifact-missing entry.
        let log = controller.startup_log().render();
        let fetch_pos = log.find("Unable to download").unwrap();
        let missing_pos = log.find("does not exist").unwrap();
        assert!(fetch_pos < missing_pos, "log order wrong:\n{}", log);
    }

    // ---- P4: version default ----

    #[tokio::test]
    async fn test_version_empty_before_load() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _, _) = controller_with(dir.path(), working_behavior());
        assert_eq!(controller.version(), "");
    }

    #[tokio::test]
    async fn test_version_cached_after_start() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let (controller, _, _) = controller_with(dir.path(), working_behavior());

        controller.start().await.unwrap();
        assert_eq!(controller.version(), "2.7.1");
    }

    #[tokio::test]
    async fn test_missing_version_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let behavior = FakeBehavior {
            version: "",
            log_text: "ready",
            ..Default::default()
        };
        let (controller, _, _) = controller_with(dir.path(), behavior);

        controller.start().await.unwrap();
        // State is not reverted; the failure is logged.
        assert_eq!(controller.state(), LifecycleState::Running);
        assert_eq!(controller.version(), "");
        assert!(controller
            .startup_log()
            .render()
            .contains("Unable to get forecaster version"));
    }

    // ---- P5: component log passthrough ----

    #[tokio::test]
    async fn test_component_log_not_available_without_handle() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _, _) = controller_with(dir.path(), working_behavior());
        assert_eq!(controller.component_log().await, LOG_NOT_AVAILABLE);
    }

    #[tokio::test]
    async fn test_component_log_passthrough() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let (controller, _, _) = controller_with(dir.path(), working_behavior());

        controller.start().await.unwrap();
        assert_eq!(controller.component_log().await, "forecast engine ready");
    }

    #[tokio::test]
    async fn test_component_log_failure_returns_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let behavior = FakeBehavior {
            fail_log: true,
            version: "1.0",
            log_text: "",
            ..Default::default()
        };
        let (controller, _, _) = controller_with(dir.path(), behavior);

        controller.start().await.unwrap();
        let log = controller.component_log().await;
        assert!(log.contains("Unable to get log"), "got: {}", log);
        assert!(log.contains("log pipe broken"), "got: {}", log);
    }

    // ---- Scenario A: full happy path ----

    #[tokio::test]
    async fn test_full_startup_reaches_running() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let (controller, constructed, _) = controller_with(dir.path(), working_behavior());

        controller.start().await.unwrap();

        assert_eq!(controller.state(), LifecycleState::Running);
        assert!(!controller.version().is_empty());
        assert!(controller.termination_hook_registered());
        assert_eq!(constructed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_hook_registered_only_once_across_restarts() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let (controller, _, _) = controller_with(dir.path(), working_behavior());

        controller.start().await.unwrap();
        controller.stop().await;
        controller.start().await.unwrap();

        let log = controller.startup_log().render();
        assert_eq!(log.matches("Registered process termination hook").count(), 1);
    }

    // ---- Scenario C: missing entry point ----

    #[tokio::test]
    async fn test_missing_start_entry_point_reported() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let behavior = FakeBehavior {
            fail_load: Some("start"),
            ..Default::default()
        };
        let (controller, constructed, _) = controller_with(dir.path(), behavior);

        let err = controller.start().await.err().unwrap();
        match err {
            LifecycleError::Load(LoadError::EntryPointMissing(name)) => assert_eq!(name, "start"),
            other => panic!("expected EntryPointMissing, got: {:?}", other),
        }
        assert_eq!(constructed.load(Ordering::SeqCst), 0);
        assert!(controller
            .startup_log()
            .render()
            .contains("entry point missing: start"));
    }

    // ---- Scenario D: termination hook ----

    #[tokio::test]
    async fn test_termination_hook_stops_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let (controller, _, stops) = controller_with(dir.path(), working_behavior());

        controller.start().await.unwrap();
        controller.run_termination_hook().await;
        controller.run_termination_hook().await;

        assert_eq!(stops.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state(), LifecycleState::Stopped);
    }

    #[tokio::test]
    async fn test_termination_hook_tolerates_never_started() {
        let dir = tempfile::tempdir().unwrap();
        let (controller, _, stops) = controller_with(dir.path(), working_behavior());

        controller.run_termination_hook().await;

        assert_eq!(stops.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), LifecycleState::Uninitialized);
    }

    // ---- Stop failure policy ----

    #[tokio::test]
    async fn test_stop_failure_still_transitions_to_stopped() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let behavior = FakeBehavior {
            fail_stop: true,
            version: "1.0",
            log_text: "ready",
            ..Default::default()
        };
        let (controller, _, _) = controller_with(dir.path(), behavior);

        controller.start().await.unwrap();
        controller.stop().await;

        assert_eq!(controller.state(), LifecycleState::Stopped);
        assert_eq!(controller.component_log().await, LOG_NOT_AVAILABLE);
        assert!(controller
            .startup_log()
            .render()
            .contains("Forecaster stop failed"));
    }

    // ---- Start failure clears the handle ----

    #[tokio::test]
    async fn test_start_invocation_failure_clears_handle() {
        let dir = tempfile::tempdir().unwrap();
        place_artifact(dir.path());
        let behavior = FakeBehavior {
            fail_start: true,
            version: "1.0",
            log_text: "ready",
            ..Default::default()
        };
        let (controller, _, _) = controller_with(dir.path(), behavior);

        let err = controller.start().await.err().unwrap();
        assert!(matches!(err, LifecycleError::StartFailed(_)));
        assert_eq!(controller.state(), LifecycleState::Failed);
        assert_eq!(controller.component_log().await, LOG_NOT_AVAILABLE);
    }

    // ---- StartupLog ----

    #[test]
    fn test_startup_log_append_only() {
        let log = StartupLog::default();
        assert!(log.is_empty());
        log.push("first");
        log.push("second");
        assert_eq!(log.len(), 2);
        assert_eq!(log.render(), "first\nsecond");
    }
}
