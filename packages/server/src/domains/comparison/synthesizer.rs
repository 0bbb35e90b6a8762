use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gemini_client::InlineData;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::domains::intake::{ComparisonRequest, UploadedImage};
use crate::kernel::BaseAI;

use super::{
    build_prompt, decode_result, enforce_allowlist, resolve_vendors, strip_code_fences,
    vendors_text, ComparisonError, ComparisonResult,
};

/// What to do when `platforms` decoded to something other than a list of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VendorFallbackPolicy {
    /// Use the default vendor set
    #[default]
    Substitute,
    /// Fail the request
    Reject,
}

impl FromStr for VendorFallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substitute" => Ok(VendorFallbackPolicy::Substitute),
            "reject" => Ok(VendorFallbackPolicy::Reject),
            other => Err(format!(
                "unknown vendor fallback policy '{}', expected 'substitute' or 'reject'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SynthesizerConfig {
    /// Upper bound for the single model call
    pub model_timeout: Duration,
    pub fallback_policy: VendorFallbackPolicy,
    /// Filter model output against the request's vendor list
    pub enforce_allowlist: bool,
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            model_timeout: Duration::from_secs(60),
            fallback_policy: VendorFallbackPolicy::Substitute,
            enforce_allowlist: true,
        }
    }
}

/// Builds the prompt, makes exactly one model call, and decodes the answer.
pub struct ComparisonSynthesizer {
    ai: Arc<dyn BaseAI>,
    config: SynthesizerConfig,
}

impl ComparisonSynthesizer {
    pub fn new(ai: Arc<dyn BaseAI>, config: SynthesizerConfig) -> Self {
        Self { ai, config }
    }

    pub fn config(&self) -> &SynthesizerConfig {
        &self.config
    }

    /// Produce a comparison for one request.
    ///
    /// Fails without a partial result; the error is logged here and returned.
    pub async fn synthesize(
        &self,
        request: &ComparisonRequest,
        cancel: &CancellationToken,
    ) -> Result<ComparisonResult, ComparisonError> {
        let result = self.run(request, cancel).await;

        if let Err(e) = &result {
            error!(error = %e, kind = e.kind(), "Comparison synthesis failed");
        }

        result
    }

    async fn run(
        &self,
        request: &ComparisonRequest,
        cancel: &CancellationToken,
    ) -> Result<ComparisonResult, ComparisonError> {
        let vendors = resolve_vendors(&request.vendors, self.config.fallback_policy)?;
        let prompt = build_prompt(
            &request.product_name,
            &vendors_text(&vendors),
            request.image.as_ref(),
        );

        let image = match &request.image {
            Some(image) => Some(encode_image(image).await?),
            None => None,
        };

        let start = Instant::now();
        let raw = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ComparisonError::Cancelled),
            outcome = tokio::time::timeout(self.config.model_timeout, self.ai.generate(&prompt, image)) => {
                outcome.map_err(|_| ComparisonError::Timeout(self.config.model_timeout))??
            }
        };

        info!(
            model = self.ai.model_name(),
            duration_ms = start.elapsed().as_millis(),
            response_length = raw.len(),
            "Model call completed"
        );

        let cleaned = strip_code_fences(&raw);
        let result = decode_result(&cleaned)?;

        let result = if self.config.enforce_allowlist {
            enforce_allowlist(result, &vendors)
        } else {
            result
        };

        debug!(
            deals = result.deals.len(),
            has_best_deal = result.best_deal.is_some(),
            "Comparison decoded"
        );

        Ok(result)
    }
}

async fn encode_image(image: &UploadedImage) -> Result<InlineData, ComparisonError> {
    let bytes = tokio::fs::read(image.path())
        .await
        .map_err(ComparisonError::ImageRead)?;

    Ok(InlineData::from_bytes(image.mime_type(), &bytes))
}
