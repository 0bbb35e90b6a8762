use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

/// Vendors the caller asked to compare, as decoded from `platforms`.
#[derive(Debug, Clone, PartialEq)]
pub enum VendorSelection {
    /// Ordered vendor names (possibly empty)
    Listed(Vec<String>),
    /// Valid JSON that is not an array of strings
    Unlisted(Value),
}

impl Default for VendorSelection {
    fn default() -> Self {
        VendorSelection::Listed(Vec::new())
    }
}

impl VendorSelection {
    /// Classify decoded `platforms` JSON.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                let names: Option<Vec<String>> = items
                    .iter()
                    .map(|v| v.as_str().map(str::to_string))
                    .collect();
                match names {
                    Some(names) => VendorSelection::Listed(names),
                    None => VendorSelection::Unlisted(Value::Array(items)),
                }
            }
            other => VendorSelection::Unlisted(other),
        }
    }

    /// Listed vendor names, or `None` for an unlisted selection.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            VendorSelection::Listed(names) => Some(names),
            VendorSelection::Unlisted(_) => None,
        }
    }
}

/// An uploaded image stored in a temporary file.
///
/// The file is deleted when this value is dropped.
#[derive(Debug)]
pub struct UploadedImage {
    file: NamedTempFile,
    mime_type: String,
    file_name: Option<String>,
    size: usize,
}

impl UploadedImage {
    pub fn new(
        file: NamedTempFile,
        mime_type: impl Into<String>,
        file_name: Option<String>,
        size: usize,
    ) -> Self {
        Self {
            file,
            mime_type: mime_type.into(),
            file_name,
            size,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Size in bytes as received
    pub fn size(&self) -> usize {
        self.size
    }
}

/// One comparison request, built per HTTP call and dropped when it completes.
#[derive(Debug, Default)]
pub struct ComparisonRequest {
    /// Free-text product name (may be empty)
    pub product_name: String,
    pub image: Option<UploadedImage>,
    pub vendors: VendorSelection,
}

impl ComparisonRequest {
    /// Text-only request with a listed vendor selection.
    pub fn text(product_name: impl Into<String>, vendors: &[&str]) -> Self {
        Self {
            product_name: product_name.into(),
            image: None,
            vendors: VendorSelection::Listed(vendors.iter().map(|v| v.to_string()).collect()),
        }
    }
}
