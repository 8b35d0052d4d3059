//! Folio HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use folio::config::Config;
use folio::gateway::{HandlerState, create_router_with_state};
use folio::model::GenaiChatModel;
use folio::orchestrator::Prioritizer;
use folio::reorder::{ModelRanker, ProjectRanker, RankingStrategy, ScoreRanker};
use folio::scoring::PromptScorer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        model = %config.model,
        strategy = %config.strategy,
        timeout_ms = config.timeout_ms,
        "Folio starting"
    );

    let catalog = config.load_projects()?;
    if config.catalog_path.is_none() {
        tracing::info!(count = catalog.len(), "Using built-in project catalog");
    }

    let ranker = build_ranker(&config);
    let prioritizer = Prioritizer::new(ranker).with_timeout(config.timeout());

    let state = HandlerState::new(
        prioritizer,
        catalog,
        config.model.as_str(),
        config.strategy,
    );

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Folio shutdown complete");
    Ok(())
}

fn build_ranker(config: &Config) -> Arc<dyn ProjectRanker> {
    let model = Arc::new(GenaiChatModel::new(config.model.clone()));
    let scorer = Arc::new(PromptScorer::new(Arc::clone(&model)));

    match config.strategy {
        RankingStrategy::Model => Arc::new(ModelRanker::new(model, scorer)),
        RankingStrategy::Scores => Arc::new(ScoreRanker::new(scorer)),
    }
}

async fn run_health_check() -> i32 {
    let port = std::env::var("FOLIO_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
