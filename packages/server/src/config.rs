use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::domains::comparison::{SynthesizerConfig, VendorFallbackPolicy};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub model_timeout: Duration,
    pub vendor_fallback_policy: VendorFallbackPolicy,
    pub enforce_vendor_allowlist: bool,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let gemini_api_key = get("GEMINI_API_KEY").unwrap_or_default();
        if gemini_api_key.is_empty() {
            // The client is still built; calls fail with an API error.
            tracing::warn!("GEMINI_API_KEY is not set, model calls will fail");
        }

        Ok(Self {
            port: get("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            gemini_api_key,
            gemini_model: get("GEMINI_MODEL")
                .unwrap_or_else(|| gemini_client::DEFAULT_MODEL.to_string()),
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| gemini_client::DEFAULT_BASE_URL.to_string()),
            model_timeout: parse_timeout(get("MODEL_TIMEOUT_SECS"))
                .context("Invalid MODEL_TIMEOUT_SECS")?,
            vendor_fallback_policy: get("VENDOR_FALLBACK_POLICY")
                .unwrap_or_else(|| "substitute".to_string())
                .parse::<VendorFallbackPolicy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid VENDOR_FALLBACK_POLICY")?,
            enforce_vendor_allowlist: get("ENFORCE_VENDOR_ALLOWLIST")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("Invalid ENFORCE_VENDOR_ALLOWLIST")?
                .unwrap_or(true),
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("uploads")),
            max_upload_bytes: get("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|| (10 * 1024 * 1024).to_string())
                .parse()
                .context("MAX_UPLOAD_BYTES must be a valid number")?,
        })
    }

    /// Settings handed to the comparison synthesizer
    pub fn synthesizer_config(&self) -> SynthesizerConfig {
        SynthesizerConfig {
            model_timeout: self.model_timeout,
            fallback_policy: self.vendor_fallback_policy,
            enforce_allowlist: self.enforce_vendor_allowlist,
        }
    }
}

fn parse_timeout(value: Option<String>) -> Result<Duration> {
    let secs: u64 = value
        .unwrap_or_else(|| "60".to_string())
        .parse()
        .context("expected a whole number of seconds")?;
    if secs == 0 {
        anyhow::bail!("timeout must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => anyhow::bail!("expected true, false, 1 or 0, got {other:?}"),
    }
}
