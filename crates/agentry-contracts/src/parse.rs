// Lenient parsing of dynamic configuration at the transport edge
//
// API handlers and CLI flags hand the run-scoped override request around as
// a raw JSON string. Absent, empty, and literal "null" payloads all mean
// "no overrides", as does a structurally valid request that overrides
// nothing; malformed payloads are rejected before a run ever starts.

use agentry_core::DynamicAgentConfig;
use thiserror::Error;

/// Errors from parsing a dynamic configuration payload
#[derive(Debug, Error)]
pub enum ParseConfigError {
    #[error("invalid JSON for agent config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse an optional JSON payload into a dynamic configuration request
///
/// Returns `Ok(None)` when the payload carries no overrides at all, so
/// callers can skip building a run overlay entirely.
pub fn parse_dynamic_config(
    raw: Option<&str>,
) -> Result<Option<DynamicAgentConfig>, ParseConfigError> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() && raw.trim() != "null" => raw,
        _ => return Ok(None),
    };

    let config: DynamicAgentConfig = serde_json::from_str(raw)?;
    if config.is_empty() {
        return Ok(None);
    }
    Ok(Some(config))
}
