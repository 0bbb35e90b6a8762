// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// What to ask the model lives in domains/comparison.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use async_trait::async_trait;
use gemini_client::InlineData;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Single model call with prompt text and an optional inline image.
    /// Returns the raw text response; parse it in calling code.
    async fn generate(
        &self,
        prompt: &str,
        image: Option<InlineData>,
    ) -> gemini_client::Result<String>;

    /// Model id, for logs
    fn model_name(&self) -> &str {
        "unknown"
    }
}
