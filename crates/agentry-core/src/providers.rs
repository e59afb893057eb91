// Provider routing by model-name prefix
//
// Routing derives a client and API mode from the resolved (concrete) model
// name when nothing more specific set them, e.g. "gemini/" prefixed models
// go to the gemini client. Mappings are tried in order; first match wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::selection::{ApiMode, ClientKind};

/// Routes one model-name prefix to provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderMapping {
    /// Model name prefix to match (e.g. "gpt-", "gemini/")
    pub prefix: String,
    pub client: ClientKind,
    pub api_mode: ApiMode,
}

/// Fallback provider settings when no prefix matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDefaults {
    pub client: ClientKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_mode: Option<ApiMode>,
}

/// Prefix-based provider routing applied to resolved model names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRouting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<ProviderDefaults>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<ProviderMapping>,
}

impl ProviderRouting {
    /// First mapping whose prefix matches the model name
    pub fn match_model(&self, model: &str) -> Option<&ProviderMapping> {
        let matched = self
            .mappings
            .iter()
            .find(|mapping| model.starts_with(&mapping.prefix));
        match matched {
            Some(mapping) => debug!(model, prefix = %mapping.prefix, "matched provider mapping"),
            None => debug!(model, "no provider prefix matched"),
        }
        matched
    }
}
