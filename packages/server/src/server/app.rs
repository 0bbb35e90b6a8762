//! Application setup and server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::comparison::{ComparisonSynthesizer, SynthesizerConfig};
use crate::kernel::{BaseAI, GeminiClient};
use crate::server::routes::{health_handler, search_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub synthesizer: Arc<ComparisonSynthesizer>,
    /// Where uploaded images are stored for the duration of a request
    pub upload_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        ai: Arc<dyn BaseAI>,
        synthesizer_config: SynthesizerConfig,
        upload_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            synthesizer: Arc::new(ComparisonSynthesizer::new(ai, synthesizer_config)),
            upload_dir: Arc::new(upload_dir.into()),
        }
    }

    /// Build state backed by a Gemini client.
    ///
    /// The client is created even when the API key is empty.
    pub fn from_config(config: &Config) -> Self {
        let client = GeminiClient::new(config.gemini_api_key.clone())
            .with_base_url(config.gemini_base_url.clone())
            .with_model(config.gemini_model.clone())
            .with_timeout(config.model_timeout);

        Self::new(
            Arc::new(client),
            config.synthesizer_config(),
            config.upload_dir.clone(),
        )
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/search", post(search_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
