// AI implementation using Gemini
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use async_trait::async_trait;
use gemini_client::{GeminiClient, InlineData};

use super::BaseAI;

#[async_trait]
impl BaseAI for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<InlineData>,
    ) -> gemini_client::Result<String> {
        let has_image = image.is_some();

        tracing::info!(
            model = self.model(),
            prompt_length = prompt.len(),
            has_image,
            "Calling Gemini API"
        );

        let response = self
            .generate_text(prompt, image)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    error = %e,
                    model = self.model(),
                    prompt_preview = %prompt.chars().take(200).collect::<String>(),
                    "Gemini API call failed"
                );
            })?;

        tracing::info!(
            response_length = response.len(),
            model = self.model(),
            "Gemini API response received"
        );

        Ok(response)
    }

    fn model_name(&self) -> &str {
        self.model()
    }
}
