//! Application Startup
//!
//! Application building and server initialization from resolved settings.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::config::Settings;
use crate::infrastructure::database;
use crate::presentation::http::{handlers::health, routes};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// State over a lazily-connected pool; nothing is opened until first use.
    pub fn new(settings: Arc<Settings>) -> Self {
        let db = database::create_pool(&settings.database);
        Self { db, settings }
    }
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        let settings = Arc::new(settings);

        let state = AppState::new(settings.clone());
        tracing::info!(
            host = settings.database.host.as_deref().unwrap_or("<default>"),
            database = settings.database.name.as_deref().unwrap_or("<default>"),
            "Database pool configured (lazy)"
        );

        health::init_server_start();
        let router = routes::create_router(state);

        let listener = TcpListener::bind(settings.server.bind_addr()).await?;
        tracing::info!("Listening on {}", listener.local_addr()?);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
