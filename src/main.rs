use anyhow::Context;
use feedgen_did::app;
use feedgen_did::config::AppConfig;
use feedgen_did::state::AppState;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        "Service DID: {} (hostname: {})",
        config.service.service_did,
        config.service.hostname
    );

    if !config.service.serves_did_document() {
        tracing::warn!(
            "FEEDGEN_SERVICE_DID does not end with FEEDGEN_HOSTNAME; /.well-known/did.json will answer 404"
        );
    }

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Feed generator DID service listening on {}", addr);

    let router = app(AppState::new(config.service));
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
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
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating shutdown");
        },
    }
}
