//! Blog API server binary.
//!
//! Wires together configuration, structured logging, the seeded post store,
//! and the HTTP server, then serves until a shutdown signal arrives.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `blog-config.yaml` (optional) and `BLOG_*` env
//! 2. Initialize structured logging (tracing)
//! 3. Build the post store from the seed data, rejecting duplicate slugs
//! 4. Serve the API until SIGTERM / `Ctrl-C`

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use blog_api::{AppState, InMemoryPostRepository};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{BlogConfig, LoggingConfig, CONFIG_PATH};
use crate::error::ServerAppError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, store construction, or the server
/// itself fails.
#[tokio::main]
async fn main() -> Result<(), ServerAppError> {
    // 1. Load configuration. Logging is not up yet, so report after init.
    let config = BlogConfig::load(Path::new(CONFIG_PATH))?;

    // 2. Initialize structured logging.
    init_logging(&config.logging)?;
    info!("blog-server starting");

    let server_config = config.server_config();
    info!(
        host = server_config.host,
        port = server_config.port,
        allowed_origins = ?server_config.allowed_origins,
        "Configuration loaded"
    );

    // 3. Build the post store.
    let repository = InMemoryPostRepository::seeded()?;
    info!(post_count = repository.len(), "Post store initialized");
    let state = Arc::new(AppState::new(Arc::new(repository)));

    // 4. Serve.
    blog_api::start_server(&server_config, state).await?;

    info!("blog-server exited cleanly");
    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig) -> Result<(), ServerAppError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&logging.level).map_err(|e| ServerAppError::Logging {
            message: format!("invalid log level {:?}: {e}", logging.level),
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
