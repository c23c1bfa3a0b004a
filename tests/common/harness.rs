//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use triage::config::Config;
use triage::gateway::{HandlerState, create_router_with_state};
use triage::knowledge::Entry;
use triage::orchestrator::{Orchestrator, build_orchestrator};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    /// Written to the knowledge base file; `None` lets the server seed the defaults.
    pub entries: Option<Vec<Entry>>,
    pub cache_enabled: Option<bool>,
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub orchestrator: Arc<Orchestrator>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _temp_dir: TempDir,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

/// Spawns a server with the template generator and no embedding model.
///
/// The knowledge base lives in a temp dir owned by the returned [`TestServer`].
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let temp_dir = TempDir::new()?;
    let kb_path = temp_dir.path().join("knowledge_base.json");

    if let Some(entries) = &config.entries {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
        std::fs::write(&kb_path, json)?;
    }

    let server_config = Config {
        knowledge_base_path: kb_path,
        mock_provider: true,
        cache_enabled: config.cache_enabled.unwrap_or(true),
        ..Config::default()
    };

    let orchestrator = build_orchestrator(&server_config)
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    let orchestrator = Arc::new(orchestrator);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let local_addr = listener.local_addr()?;

    let app = create_router_with_state(HandlerState::new(Arc::clone(&orchestrator)));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        orchestrator,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        _temp_dir: temp_dir,
    })
}
