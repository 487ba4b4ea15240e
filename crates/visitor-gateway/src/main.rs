//! Visitor counter server.
//!
//! - Counter endpoint: GET/POST /v1/visits (and /)
//! - Storage handle opened once at startup, shared by all requests
//! - Graceful shutdown on Ctrl-C / SIGTERM, /readyz flips to 503 first

use tracing_subscriber::{fmt, EnvFilter};

use visitor_core::error::{Result, VisitorError};
use visitor_gateway::{app_state::AppState, config, router, storage};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load()?;
    let listen = cfg.server.listen_addr()?;
    let store = storage::open(&cfg.storage)?;

    tracing::info!(
        %listen,
        backend = store.backend(),
        table = %cfg.storage.table_name,
        "visitor-gateway starting"
    );

    let state = AppState::new(cfg, store);
    let app = router::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| VisitorError::Internal(format!("failed to bind {listen}: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|e| VisitorError::Internal(format!("server failed: {e}")))?;

    tracing::info!("visitor-gateway stopped");
    Ok(())
}

async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}
