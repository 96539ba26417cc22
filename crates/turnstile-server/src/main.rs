use anyhow::Context;
use tokio::net::TcpListener;
use turnstile_core::AppConfig;
use turnstile_server::{routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    // Optional local env file, same contract as the original deployment.
    if dotenvy::from_filename("local.env").is_err() {
        tracing::info!("local.env not found, using process environment");
    }

    let config = AppConfig::from_env().context("resolving configuration")?;
    let state = AppState::from_config(&config)?;
    let app = routes::create_router(state, &config.cors);

    // Marker file for container liveness probes; removed on shutdown.
    let _liveness = LivenessFile::create("/tmp/live")?;

    let addr = format!("{}:{}", config.server.listen_addr, config.server.listen_port);
    tracing::info!(address = %addr, "turnstile-server listening");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down gracefully");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}

/// RAII guard for the liveness marker file.
struct LivenessFile {
    path: &'static str,
}

impl LivenessFile {
    fn create(path: &'static str) -> anyhow::Result<Self> {
        std::fs::File::create(path)
            .with_context(|| format!("creating liveness file {path}"))?;
        Ok(Self { path })
    }
}

impl Drop for LivenessFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(self.path);
    }
}
