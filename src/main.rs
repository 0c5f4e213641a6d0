use std::sync::Arc;

use stock_api::{AppState, Config, MetricsRegistry, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    tracing::info!(
        "Loaded configuration: response style {:?}",
        config.response_style
    );

    let addr = config.server_addr().map_err(|e| {
        tracing::error!("Invalid server address '{}': {}", config.host, e);
        e
    })?;

    // Реестр метрик живёт столько же, сколько процесс
    let state = Arc::new(AppState {
        config,
        metrics: MetricsRegistry::new(),
    });

    // Канал завершения (graceful shutdown)
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(true);
    });

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Stock API starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /                - Greeting");
    tracing::info!("  - GET /health          - Health check");
    tracing::info!("  - GET /stock/{{symbol}} - Placeholder quote");
    tracing::info!("  - GET /metrics         - Prometheus metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
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
        () = ctrl_c => {},
        () = terminate => {},
    }
}

fn setup_tracing() {
    // RUST_LOG управляет фильтром; по умолчанию "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
