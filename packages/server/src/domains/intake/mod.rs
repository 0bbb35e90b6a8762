//! Request intake: turns a raw `POST /search` multipart body into a
//! `ComparisonRequest`.

pub mod errors;
pub mod models;
pub mod multipart;
pub mod platforms;
pub mod upload;

pub use errors::IntakeError;
pub use models::{ComparisonRequest, UploadedImage, VendorSelection};
pub use multipart::read_comparison_request;
pub use platforms::parse_platforms;
pub use upload::persist_upload;
