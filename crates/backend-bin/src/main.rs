use anyhow::Context;
use backend_lib::{config::Settings, logging, router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let settings = Settings::load().context("failed to load settings")?;
    logging::init_tracing(&settings);

    let addr = settings.bind_addr()?;
    let state = AppState::new(settings);

    if !state.credential.is_configured() {
        warn!("no API key configured (set `key`), every request will be rejected");
    }
    match state.settings.allowed_origin.as_deref() {
        Some(origin) if !origin.is_empty() => info!(%origin, "CORS restricted to origin"),
        _ => info!("CORS allows any origin"),
    }

    let app = router::create_router(state.clone());

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening on port {}", addr.port());
    info!("connected to http://localhost:{}/", addr.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
}
