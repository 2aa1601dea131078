//! Reel API - video upload and retrieval service
//!
//! HTTP boundary over the Reelbase use cases. Stores videos in PostgreSQL when
//! `DATABASE_URL` is set, in process memory otherwise.

mod config;
mod dto;
mod handlers;
mod routes;
mod store;

use anyhow::{Context, Result};
use reelbase_domain::media::{GetVideo, UploadVideo};
use reelbase_infra::{connect, InMemoryVideoRepository, PgVideoRepository, UuidGenerator};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LogFormat};
use crate::store::VideoBackend;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub upload_video: Arc<UploadVideo<VideoBackend, UuidGenerator>>,
    pub get_video: Arc<GetVideo<VideoBackend>>,
    /// Name of the repository backend, reported by `/health`
    pub storage: &'static str,
}

impl AppState {
    /// Wire both use cases to the same backend
    pub fn new(backend: VideoBackend) -> Self {
        Self {
            storage: backend.name(),
            upload_video: Arc::new(UploadVideo::new(backend.clone(), UuidGenerator::new())),
            get_video: Arc::new(GetVideo::new(backend)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    init_tracing(config.log_format);

    info!("Starting Reel API");

    let backend = match &config.database {
        Some(db_config) => {
            info!(?db_config, "Initializing PostgreSQL video repository");
            let pool = connect(db_config)
                .await
                .context("Failed to connect to PostgreSQL")?;
            let repository = PgVideoRepository::new(pool);
            repository
                .migrate()
                .await
                .context("Failed to run database migrations")?;
            VideoBackend::Postgres(repository)
        }
        None => {
            warn!("DATABASE_URL not set, videos are kept in memory only");
            VideoBackend::Memory(InMemoryVideoRepository::new())
        }
    };

    info!(backend = backend.name(), "Video repository ready");

    // Build HTTP router
    let app = routes::create_router(AppState::new(backend));

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
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
                warn!(error = %err, "Failed to listen for SIGTERM");
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

    info!("Shutdown signal received, draining connections");
}
