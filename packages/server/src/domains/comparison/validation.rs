use serde_json::Value;

use super::{ComparisonError, ComparisonResult};

/// Decode cleaned model text into a `ComparisonResult`.
///
/// Text that is not JSON fails with `ResponseParse`. JSON that does not have
/// the comparison shape fails with `SchemaViolation`.
pub fn decode_result(cleaned: &str) -> Result<ComparisonResult, ComparisonError> {
    let value: Value = serde_json::from_str(cleaned).map_err(ComparisonError::ResponseParse)?;

    let result: ComparisonResult = serde_json::from_value(value)
        .map_err(|e| ComparisonError::SchemaViolation(e.to_string()))?;

    check_structure(&result)?;
    Ok(result)
}

fn check_structure(result: &ComparisonResult) -> Result<(), ComparisonError> {
    if let Some(best) = &result.best_deal {
        if best.best_vendor.trim().is_empty() {
            return Err(ComparisonError::SchemaViolation(
                "bestDeal.bestVendor is empty".into(),
            ));
        }
    }

    for (index, deal) in result.deals.iter().enumerate() {
        if deal.vendor.trim().is_empty() {
            return Err(ComparisonError::SchemaViolation(format!(
                "deals[{index}].vendor is empty"
            )));
        }
    }

    Ok(())
}

fn normalize(vendor: &str) -> String {
    vendor.trim().to_lowercase()
}

/// Drop deals from vendors outside `allowed`.
///
/// Matching ignores case and surrounding whitespace. A best deal naming a
/// vendor outside the list is cleared. An empty list admits no vendor.
pub fn enforce_allowlist(mut result: ComparisonResult, allowed: &[String]) -> ComparisonResult {
    let allowed: Vec<String> = allowed.iter().map(|v| normalize(v)).collect();
    let is_allowed = |vendor: &str| allowed.contains(&normalize(vendor));

    let before = result.deals.len();
    result.deals.retain(|deal| {
        let keep = is_allowed(&deal.vendor);
        if !keep {
            tracing::warn!(vendor = %deal.vendor, "Dropping deal from vendor outside the allowlist");
        }
        keep
    });

    if let Some(best) = &result.best_deal {
        if !is_allowed(&best.best_vendor) {
            tracing::warn!(vendor = %best.best_vendor, "Clearing best deal from vendor outside the allowlist");
            result.best_deal = None;
        }
    }

    if result.deals.len() != before {
        tracing::info!(
            dropped = before - result.deals.len(),
            kept = result.deals.len(),
            "Applied vendor allowlist"
        );
    }

    result
}
