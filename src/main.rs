//! # Contacts Manager
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage backend (PostgreSQL or in-memory) and seed data
//! - HTTP server

use anyhow::Result;
use tracing::info;

use contacts_manager::config::Settings;
use contacts_manager::presentation::http::handlers::health;
use contacts_manager::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    contacts_manager::telemetry::init_tracing();
    health::init_server_start();

    info!("Starting Contacts Manager...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.database.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
