// Main entry point for API server

use anyhow::{Context, Result};
use comparison_server::{server::build_app, server::AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,comparison_server=debug,gemini_client=debug,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting price comparison API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        model = %config.gemini_model,
        fallback_policy = ?config.vendor_fallback_policy,
        enforce_allowlist = config.enforce_vendor_allowlist,
        "Configuration loaded"
    );

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", config.upload_dir.display()))?;

    // Build application
    let app = build_app(AppState::from_config(&config), config.max_upload_bytes);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Server running on port {}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
