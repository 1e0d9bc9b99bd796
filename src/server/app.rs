//! Application server
//!
//! This module provides the main application server implementation
//! including initialization and graceful shutdown handling.

use crate::{
    config::Settings,
    server::{routes, state::AppState},
};
use anyhow::{Context, Result};
use tokio::signal;

/// Main application struct
pub struct App {
    settings: Settings,
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new(settings: Settings) -> Self {
        tracing::debug!("Initializing application state");
        let state = AppState::new(settings.clone());

        Self { settings, state }
    }

    /// Run the server (without graceful shutdown)
    pub async fn run(self) -> Result<()> {
        let listener = self.bind().await?;
        let router = routes::create_router(self.state);

        axum::serve(listener, router).await?;

        Ok(())
    }

    /// Run the server with graceful shutdown support
    ///
    /// The server will shut down when receiving SIGINT (Ctrl+C) or SIGTERM.
    pub async fn run_with_graceful_shutdown(self) -> Result<()> {
        let listener = self.bind().await?;
        let router = routes::create_router(self.state);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }

    /// Bind the listening socket and announce the port
    ///
    /// Bind failure (port in use, bad address) is fatal and propagates to main.
    async fn bind(&self) -> Result<tokio::net::TcpListener> {
        let addr = self.settings.server_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        // External contract: exactly one stdout line announcing the port
        println!("{}", self.settings.listening_banner());
        tracing::info!(
            app_name = %self.settings.app_name,
            addr = %addr,
            "Server listening"
        );

        Ok(listener)
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Create a future that completes when a shutdown signal is received
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_fails_on_occupied_port() {
        // Take a port, then ask the app to bind the same one
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port,
            ..Settings::default()
        };
        let app = App::new(settings);
        let err = app.bind().await.unwrap_err();
        assert!(err.to_string().contains("Failed to bind"));
    }

    #[tokio::test]
    async fn bind_succeeds_on_free_port() {
        // Port 0 is rejected by Settings::load but fine for an ephemeral test bind
        let settings = Settings {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..Settings::default()
        };
        let app = App::new(settings);
        assert!(app.bind().await.is_ok());
    }
}
