//! Helloworld greeting service
//!
//! A minimal HTTP server that greets on one or two fixed routes,
//! listening on a port taken from the environment.

use anyhow::Result;
use clap::Parser;
use helloworld::{
    config::{Environment, Settings},
    server::App,
};
use tracing_subscriber::EnvFilter;

/// Helloworld greeting service
#[derive(Parser, Debug)]
#[command(name = "helloworld")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (overrides PORT env var)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides HOST env var)
    #[arg(long)]
    host: Option<String>,

    /// Log level: trace, debug, info, warn, error (overrides LOG_LEVEL env var)
    #[arg(long)]
    log_level: Option<String>,

    /// Environment: dev, staging, prod (overrides ENVIRONMENT env var)
    #[arg(short, long)]
    env: Option<Environment>,

    /// Disable the secondary /app greeting route
    #[arg(long)]
    no_app_route: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first (before logging, so we can use log_level)
    let mut settings = Settings::load()?;

    // Override settings with CLI arguments
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(env) = args.env {
        settings.environment = env;
    }
    if args.no_app_route {
        settings.enable_app_route = false;
    }

    // CLI overrides go through the same validation as env values
    settings.validate()?;

    init_tracing(&settings.log_level);

    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        environment = %settings.environment,
        host = %settings.host,
        port = %settings.port,
        app_route = settings.enable_app_route,
        "Starting application"
    );

    // Build and run the application
    let app = App::new(settings);
    app.run_with_graceful_shutdown().await?;

    tracing::info!("Application shutdown complete");

    Ok(())
}

/// Initialize tracing subscriber with the specified log level
///
/// RUST_LOG takes precedence over the configured level when set.
/// Logs go to stderr; stdout is reserved for the listening banner.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
