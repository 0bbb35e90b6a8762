//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod test_dependencies;
pub mod traits;

pub use gemini_client::GeminiClient;
pub use test_dependencies::{GenerateCall, MockAI};
pub use traits::*;
