//! Discord Profile API - normalized Discord user profiles over HTTP
//!
//! Looks users up through the Discord REST API with a bot token and serves
//! the result as JSON with permissive CORS.

use discord_profile_api::{start_server, ApiError, Config, Result, ServerState, SharedState};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let env_filter =
        EnvFilter::from_default_env().add_directive("discord_profile_api=info".parse()?);

    // Use JSON format for GCP Cloud Logging when LOG_FORMAT=json
    if std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false)
    {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_stackdriver::layer())
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    };

    info!("Starting Discord Profile API...");

    let config = Config::from_env();
    info!("Port: {}", config.port);
    info!("Discord API: {}", config.discord_api_base_url);
    if config.discord_bot_token.is_none() {
        warn!("DISCORD_BOT_TOKEN is not set, lookups will report an error");
    }
    info!(
        "Example usage: http://localhost:{}/?userid=470573716711931905",
        config.port
    );

    let state: SharedState = Arc::new(ServerState::new(config.discord_client()));

    // Start HTTP server (blocking)
    start_server(state, config.port)
        .await
        .map_err(|e| ApiError::Config(format!("Server error: {}", e)))?;

    Ok(())
}
