//! Test server harness.

use folio::gateway::{HandlerState, create_router_with_state};
use folio::model::MockChatModel;
use folio::orchestrator::Prioritizer;
use folio::project::{Project, default_projects};
use folio::reorder::{ModelRanker, ProjectRanker, RankingStrategy, ScoreRanker};
use folio::scoring::MockScorer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

/// Model double the ranker is wired to.
pub enum TestModel {
    /// Rank by [`MockScorer`] output, no model involved.
    Scores,
    /// A [`ModelRanker`] over the given mock model.
    Model(MockChatModel),
}

pub struct TestServerConfig {
    pub port: u16,
    pub timeout: Duration,
    pub catalog: Vec<Project>,
    pub scorer: MockScorer,
    pub model: TestModel,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            timeout: Duration::from_secs(5),
            catalog: default_projects(),
            scorer: MockScorer::new(),
            model: TestModel::Scores,
        }
    }
}

impl TestServerConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_catalog(mut self, catalog: Vec<Project>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_scorer(mut self, scorer: MockScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_model(mut self, model: MockChatModel) -> Self {
        self.model = TestModel::Model(model);
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
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
}

/// Spawns a server whose model and scorer are both test doubles.
///
/// Binds an ephemeral port unless `config.port` is set.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let (ranker, strategy): (Arc<dyn ProjectRanker>, RankingStrategy) = match config.model {
        TestModel::Scores => (
            Arc::new(ScoreRanker::new(config.scorer)),
            RankingStrategy::Scores,
        ),
        TestModel::Model(model) => (
            Arc::new(ModelRanker::new(model, config.scorer)),
            RankingStrategy::Model,
        ),
    };

    let prioritizer = Prioritizer::new(ranker).with_timeout(config.timeout);
    let state = HandlerState::new(prioritizer, config.catalog, "mock", strategy);
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let server_handle = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
