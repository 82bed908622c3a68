//! Ollama Relay
//!
//! Forwards chat requests to an Ollama backend, filling in a default model.

use anyhow::{Context, Result};
use clap::Parser;
use ollama_relay::{
    config::{normalize_base_url, Environment, Settings},
    logging::init_tracing,
    server::App,
};
use std::path::PathBuf;

/// Ollama Relay
///
/// Minimal HTTP gateway in front of an Ollama chat backend.
#[derive(Parser, Debug)]
#[command(name = "ollama-relay")]
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

    /// Model used when a request has none (overrides DEFAULT_MODEL env var)
    #[arg(long)]
    default_model: Option<String>,

    /// Ollama base URL (overrides OLLAMA_URL env var)
    #[arg(long)]
    ollama_url: Option<String>,

    /// Also write JSON logs to this file (10MB rotation, 5 files kept)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration first (before logging, so we can use log_level)
    let mut settings = Settings::load()?;

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
    if let Some(model) = args.default_model {
        settings.default_model = model;
    }
    if let Some(url) = args.ollama_url {
        settings.ollama_url = normalize_base_url(&url);
    }
    settings.validate()?;

    init_tracing(&settings.log_level, args.log_file.as_deref())
        .context("Failed to initialize logging")?;

    tracing::info!(
        app_name = %settings.app_name,
        version = %settings.app_version,
        environment = %settings.environment,
        host = %settings.host,
        port = %settings.port,
        ollama_url = %settings.ollama_url,
        default_model = %settings.default_model,
        "Starting application"
    );

    let app = App::new(settings)?;

    app.run_with_graceful_shutdown().await?;

    tracing::info!("Application shutdown complete");

    Ok(())
}
