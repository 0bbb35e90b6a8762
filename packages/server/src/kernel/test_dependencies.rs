// TestDependencies - mock implementations for testing
//
// Provides a scripted BaseAI that can be injected into the synthesizer for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gemini_client::{GeminiError, InlineData};

use super::BaseAI;

/// Body returned when no response has been scripted.
pub const EMPTY_COMPARISON: &str = r#"{"bestDeal":null,"deals":[]}"#;

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a generate call
#[derive(Debug, Clone)]
pub struct GenerateCall {
    pub prompt: String,
    pub image: Option<InlineData>,
}

enum MockResponse {
    Text(String),
    Error(GeminiError),
    /// Never completes; used for timeout and cancellation tests
    Hang,
}

#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<GenerateCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw text response
    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Text(text.to_string()));
        self
    }

    /// Queue an error
    pub fn with_error(self, error: GeminiError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Queue a call that never returns
    pub fn with_hang(self) -> Self {
        self.responses.lock().unwrap().push_back(MockResponse::Hang);
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<InlineData>,
    ) -> gemini_client::Result<String> {
        self.calls.lock().unwrap().push(GenerateCall {
            prompt: prompt.to_string(),
            image,
        });

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Text(text)) => Ok(text),
            Some(MockResponse::Error(error)) => Err(error),
            Some(MockResponse::Hang) => std::future::pending().await,
            None => Ok(EMPTY_COMPARISON.to_string()),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
