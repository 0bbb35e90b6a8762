//! Pure Google Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` endpoint with no
//! domain-specific logic. Supports text prompts with inlined images.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, InlineData};
//!
//! let client = GeminiClient::from_env()?.with_model("gemini-3-flash-preview");
//!
//! // Text only
//! let text = client.generate_text("Hello!", None).await?;
//!
//! // Text plus image, sent in one call
//! let image = InlineData::from_bytes("image/png", &bytes);
//! let text = client.generate_text("What is this?", Some(image)).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::{debug, warn};

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model id.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    ///
    /// The key is not checked here; an invalid key surfaces on the first call.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (proxies, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bound every request by a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model id.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an API key was provided at all.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Raw `generateContent` call.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let start = Instant::now();
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let mut builder = self
            .http_client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, model = %self.model, "Gemini request failed");
            GeminiError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        debug!(
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            total_tokens = body.usage_metadata.as_ref().map(|u| u.total_token_count),
            "Gemini generateContent"
        );

        Ok(body)
    }

    /// Single-turn generation: prompt text followed by an optional image.
    pub async fn generate_text(&self, prompt: &str, image: Option<InlineData>) -> Result<String> {
        let mut parts = vec![Part::text(prompt)];
        if let Some(image) = image {
            parts.push(Part::inline(image));
        }

        let request = GenerateContentRequest::new().content(Content::user(parts));
        let response = self.generate_content(&request).await?;

        response.text().ok_or(GeminiError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn candidate_body(text: &str) -> String {
        json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}]
        })
        .to_string()
    }

    #[test]
    fn test_client_builder() {
        let client = GeminiClient::new("key-test")
            .with_base_url("https://custom.api.com/")
            .with_model("gemini-test");

        assert_eq!(client.api_key, "key-test");
        assert_eq!(client.base_url(), "https://custom.api.com");
        assert_eq!(client.model(), "gemini-test");
        assert!(client.has_api_key());
        assert!(!GeminiClient::new("").has_api_key());
    }

    #[tokio::test]
    async fn generate_text_sends_prompt_and_inline_image() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                Matcher::Regex(r"^/models/gemini-test:generateContent".to_string()),
            )
            .match_query(Matcher::UrlEncoded("key".into(), "secret".into()))
            .match_body(Matcher::Json(json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"text": "describe"},
                        {"inlineData": {"mimeType": "image/jpeg", "data": "AQID"}}
                    ]
                }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(candidate_body("a cat"))
            .create_async()
            .await;

        let client = GeminiClient::new("secret")
            .with_base_url(server.url())
            .with_model("gemini-test");
        let image = InlineData::from_bytes("image/jpeg", &[1, 2, 3]);

        let text = client.generate_text("describe", Some(image)).await.unwrap();

        assert_eq!(text, "a cat");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error":{"message":"API key not valid"}}"#)
            .create_async()
            .await;

        let client = GeminiClient::new("bad").with_base_url(server.url());
        let err = client.generate_text("hi", None).await.unwrap_err();

        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("API key not valid"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn response_without_text_is_empty_response() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new("k").with_base_url(server.url());
        let err = client.generate_text("hi", None).await.unwrap_err();

        assert!(matches!(err, GeminiError::EmptyResponse));
    }

    #[tokio::test]
    async fn undecodable_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = GeminiClient::new("k").with_base_url(server.url());
        let err = client.generate_text("hi", None).await.unwrap_err();

        assert!(matches!(err, GeminiError::Parse(_)));
    }
}
