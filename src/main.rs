//! JobSpark Server: in-memory job board API
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use jobspark_api::{AppState, build_app};
use jobspark_core::config::AppConfig;
use jobspark_core::error::AppError;
use jobspark_store::{JobRepository, MemoryJobRepository};

/// Endpoints listed in the start-up banner.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/api/jobs"),
    ("GET", "/api/jobs/{id}"),
    ("POST", "/api/jobs"),
    ("PATCH", "/api/jobs/{id}"),
    ("DELETE", "/api/jobs/{id}"),
    ("GET", "/api/stats"),
    ("GET", "/api/health"),
];

#[tokio::main]
async fn main() {
    let env = std::env::var("JOBSPARK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting JobSpark v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Job store ────────────────────────────────────────
    let job_repo: Arc<dyn JobRepository> = if config.store.seed {
        Arc::new(MemoryJobRepository::seeded())
    } else {
        Arc::new(MemoryJobRepository::new())
    };

    // ── Step 2: Application state and router ─────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = AppState::new(config, job_repo);
    let jobs = state.job_service.count().await?;
    tracing::info!(jobs, "Job store ready");

    let app = build_app(state);

    // ── Step 3: Bind and announce ────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("JobSpark server listening on http://{}", addr);
    for (method, path) in ENDPOINTS {
        tracing::info!("  {:<6} {}", method, path);
    }

    // ── Step 4: Serve until a shutdown signal ────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = shutdown_rx.wait_for(|stop| *stop).await;
    });
    let mut server_task = tokio::spawn(async move { server.await });

    tokio::select! {
        result = &mut server_task => {
            return flatten_server_result(result);
        }
        _ = shutdown_signal() => {
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        }
    }

    let _ = shutdown_tx.send(true);

    // ── Step 5: Drain in-flight requests ─────────────────────────
    match tokio::time::timeout(grace, server_task).await {
        Ok(result) => flatten_server_result(result)?,
        Err(_) => tracing::warn!(
            grace_seconds = grace.as_secs(),
            "In-flight requests did not finish before the grace period"
        ),
    }

    tracing::info!("JobSpark server stopped");
    Ok(())
}

fn flatten_server_result(
    result: Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<(), AppError> {
    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::internal(format!("Server error: {}", e))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {}", e))),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
