use serde_json::Value;

use super::{IntakeError, VendorSelection};

/// Decode the `platforms` form field.
///
/// Absent or empty means an empty vendor list. Anything else must be valid JSON.
pub fn parse_platforms(raw: Option<&str>) -> Result<VendorSelection, IntakeError> {
    let raw = match raw {
        None | Some("") => return Ok(VendorSelection::default()),
        Some(raw) => raw,
    };

    let value: Value = serde_json::from_str(raw)?;
    Ok(VendorSelection::from_json(value))
}
