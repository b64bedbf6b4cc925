//! Child-process component loader.
//!
//! Runs the downloaded artifact as an executable speaking line-delimited
//! JSON-RPC 2.0 on stdin/stdout. Loading performs a single
//! spawn-write-read-exit `describe` exchange; construction spawns a
//! long-lived child with `--port <port>` and keeps its pipes open for
//! `start`/`stop`/`get_process_log` calls.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, warn};

use crate::component::{
    ComponentHandle, ComponentLoader, LoadedComponent, METHOD_DESCRIBE, METHOD_PROCESS_LOG,
    METHOD_START, METHOD_STOP, REQUIRED_METHODS,
};
use crate::error::{LoadError, StopError};

// ---- JSON-RPC 2.0 wire types (local, line-delimited) ----

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: String,
    id: u64,
    method: String,
}

impl RpcRequest {
    fn new(id: u64, method: &str) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            method: method.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RpcResponse {
    #[allow(dead_code)]
    jsonrpc: Option<String>,
    #[allow(dead_code)]
    id: Option<u64>,
    result: Option<Value>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Payload of a successful `describe` response.
#[derive(Deserialize)]
struct DescribeResult {
    /// Method names the component supports.
    methods: Vec<String>,
    /// Component software version, when the component reports one.
    #[serde(default)]
    version: Option<String>,
}

// ---- ProcessComponentLoader ----

/// Loads component artifacts by executing them as child processes.
pub struct ProcessComponentLoader {
    call_timeout: Duration,
}

impl ProcessComponentLoader {
    /// Create a loader whose per-call exchanges time out after
    /// `call_timeout_secs` seconds.
    pub fn new(call_timeout_secs: u64) -> Self {
        Self {
            call_timeout: Duration::from_secs(call_timeout_secs),
        }
    }
}

#[async_trait]
impl ComponentLoader for ProcessComponentLoader {
    async fn load(&self, artifact: &Path) -> Result<Box<dyn LoadedComponent>, LoadError> {
        if !artifact.is_file() {
            return Err(LoadError::ArtifactMissing(artifact.to_path_buf()));
        }

        let desc = describe(artifact, self.call_timeout).await?;

        for required in REQUIRED_METHODS {
            if !desc.methods.iter().any(|m| m == required) {
                return Err(LoadError::EntryPointMissing(required.to_string()));
            }
        }

        debug!(
            artifact = %artifact.display(),
            version = %desc.version.as_deref().unwrap_or(""),
            "Resolved component entry points"
        );

        Ok(Box::new(ProcessComponent {
            artifact: artifact.to_path_buf(),
            version: desc.version.unwrap_or_default(),
            call_timeout: self.call_timeout,
        }))
    }
}

/// One-shot `describe` exchange: spawn the artifact, write the request,
/// read its output, let it exit.
async fn describe(artifact: &Path, timeout: Duration) -> Result<DescribeResult, LoadError> {
    let mut child = Command::new(artifact)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        // a describe that times out must not leave a stray child behind
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| LoadError::Spawn(format!("{}: {}", artifact.display(), e)))?;

    let request = encode_request(&RpcRequest::new(1, METHOD_DESCRIBE))?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(request.as_bytes())
            .await
            .map_err(|e| LoadError::Protocol(format!("failed to write describe request: {}", e)))?;
        // stdin dropped here, closing the pipe
    }

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Err(LoadError::Protocol(format!("describe failed: {}", e))),
        Err(_) => {
            return Err(LoadError::Protocol(format!(
                "describe timed out after {}s",
                timeout.as_secs()
            )));
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);

    // Parse the last non-empty line of stdout; earlier lines are treated
    // as startup chatter.
    let response_line = stdout
        .lines()
        .rev()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    if response_line.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(LoadError::Protocol(format!(
            "describe produced no output{}",
            if stderr.trim().is_empty() {
                String::new()
            } else {
                format!(" (stderr: {})", stderr.trim())
            }
        )));
    }

    let response: RpcResponse = serde_json::from_str(response_line)
        .map_err(|e| LoadError::Protocol(format!("invalid describe response: {}", e)))?;

    if let Some(err) = response.error {
        return Err(LoadError::Protocol(format!(
            "describe error (code {}): {}",
            err.code, err.message
        )));
    }

    let result = response
        .result
        .ok_or_else(|| LoadError::Protocol("describe returned neither result nor error".into()))?;

    serde_json::from_value(result)
        .map_err(|e| LoadError::Protocol(format!("malformed describe result: {}", e)))
}

fn encode_request(request: &RpcRequest) -> Result<String, LoadError> {
    let mut line = serde_json::to_string(request)
        .map_err(|e| LoadError::Protocol(format!("failed to serialize request: {}", e)))?;
    line.push('\n');
    Ok(line)
}

// ---- ProcessComponent ----

/// A loaded artifact with verified entry points, ready to construct.
struct ProcessComponent {
    artifact: PathBuf,
    version: String,
    call_timeout: Duration,
}

#[async_trait]
impl LoadedComponent for ProcessComponent {
    fn version(&self) -> &str {
        &self.version
    }

    async fn construct(&self, port: u16) -> Result<Arc<dyn ComponentHandle>, LoadError> {
        let mut child = Command::new(&self.artifact)
            .arg("--port")
            .arg(port.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            // stderr flows into the host's own output, like the rest of
            // the process diagnostics
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LoadError::Spawn(format!("{}: {}", self.artifact.display(), e)))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| LoadError::Spawn("component stdin unavailable".into()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| LoadError::Spawn("component stdout unavailable".into()))?;

        debug!(artifact = %self.artifact.display(), port, "Constructed component instance");

        Ok(Arc::new(ProcessHandle {
            io: tokio::sync::Mutex::new(ChildIo {
                child,
                stdin,
                stdout: BufReader::new(stdout),
            }),
            next_id: AtomicU64::new(1),
            call_timeout: self.call_timeout,
        }))
    }
}

// ---- ProcessHandle ----

struct ChildIo {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

/// Handle to a running component child process.
///
/// All calls share one stdin/stdout pair, so exchanges are serialized by
/// the internal mutex and bounded by the call timeout.
struct ProcessHandle {
    io: tokio::sync::Mutex<ChildIo>,
    next_id: AtomicU64,
    call_timeout: Duration,
}

impl ProcessHandle {
    /// Perform one request/response exchange with the child.
    async fn call(&self, method: &str) -> Result<Value, LoadError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = encode_request(&RpcRequest::new(id, method))?;

        let mut io = self.io.lock().await;
        tokio::time::timeout(self.call_timeout, exchange(&mut io, &request, method))
            .await
            .map_err(|_| {
                LoadError::Protocol(format!(
                    "{} timed out after {}s",
                    method,
                    self.call_timeout.as_secs()
                ))
            })?
    }
}

/// Write a request line and read lines until one parses as a JSON-RPC
/// response. Non-JSON lines are component chatter and are skipped.
async fn exchange(io: &mut ChildIo, request: &str, method: &str) -> Result<Value, LoadError> {
    io.stdin
        .write_all(request.as_bytes())
        .await
        .map_err(|e| LoadError::Protocol(format!("failed to write {} request: {}", method, e)))?;
    io.stdin
        .flush()
        .await
        .map_err(|e| LoadError::Protocol(format!("failed to flush {} request: {}", method, e)))?;

    let mut line = String::new();
    loop {
        line.clear();
        let n = io
            .stdout
            .read_line(&mut line)
            .await
            .map_err(|e| LoadError::Protocol(format!("failed to read {} response: {}", method, e)))?;
        if n == 0 {
            return Err(LoadError::Protocol(format!(
                "component exited before answering {}",
                method
            )));
        }
        if line.trim().is_empty() {
            continue;
        }

        let response: RpcResponse = match serde_json::from_str(line.trim()) {
            Ok(r) => r,
            Err(_) => {
                debug!(line = %line.trim(), "Skipping non-protocol component output");
                continue;
            }
        };

        if let Some(err) = response.error {
            return Err(LoadError::Protocol(format!(
                "{} error (code {}): {}",
                method, err.code, err.message
            )));
        }
        return response.result.ok_or_else(|| {
            LoadError::Protocol(format!("{} returned neither result nor error", method))
        });
    }
}

#[async_trait]
impl ComponentHandle for ProcessHandle {
    async fn start(&self) -> Result<(), LoadError> {
        self.call(METHOD_START).await.map(|_| ())
    }

    async fn stop(&self) -> Result<(), StopError> {
        let rpc_result = self.call(METHOD_STOP).await;

        // Whatever the stop call did, the child must not outlive the
        // handle. Give it a moment to exit on its own, then kill.
        let mut io = self.io.lock().await;
        let exited = tokio::time::timeout(Duration::from_secs(5), io.child.wait()).await;
        if exited.is_err() {
            warn!("Component did not exit after stop; killing child process");
            let _ = io.child.start_kill();
            let _ = io.child.wait().await;
        }

        rpc_result.map(|_| ()).map_err(|e| StopError(e.to_string()))
    }

    async fn process_log(&self) -> Result<String, LoadError> {
        let result = self.call(METHOD_PROCESS_LOG).await?;
        // Accept either a bare string or {"log": "..."}.
        if let Some(s) = result.as_str() {
            return Ok(s.to_string());
        }
        result
            .get("log")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| LoadError::Protocol("get_process_log returned no log text".into()))
    }
}
