//! Router harness backed by a scripted model.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use comparison_server::domains::comparison::SynthesizerConfig;
use comparison_server::kernel::MockAI;
use comparison_server::server::{build_app, AppState};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestHarness {
    pub ai: MockAI,
    pub upload_dir: TempDir,
    app: Router,
}

impl TestHarness {
    pub fn new(ai: MockAI) -> Self {
        Self::with_config(ai, SynthesizerConfig::default())
    }

    pub fn with_config(ai: MockAI, config: SynthesizerConfig) -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let state = AppState::new(Arc::new(ai.clone()), config, upload_dir.path());
        let app = build_app(state, 1024 * 1024);

        Self {
            ai,
            upload_dir,
            app,
        }
    }

    /// Send a request and decode the JSON response body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let json = serde_json::from_slice(&bytes).expect("Response is not JSON");

        (status, json)
    }

    /// Number of files left in the upload directory
    pub fn stored_uploads(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .expect("Failed to list upload dir")
            .count()
    }
}
