//! Comparison synthesis: prompt construction, the model call, and decoding
//! the model's answer into a `ComparisonResult`.

pub mod errors;
pub mod models;
pub mod prompt;
pub mod sanitize;
pub mod synthesizer;
pub mod validation;

pub use errors::ComparisonError;
pub use models::{BestDeal, ComparisonResult, Deal};
pub use prompt::{build_prompt, resolve_vendors, vendors_text, DEFAULT_VENDORS};
pub use sanitize::strip_code_fences;
pub use synthesizer::{ComparisonSynthesizer, SynthesizerConfig, VendorFallbackPolicy};
pub use validation::{decode_result, enforce_allowlist};
