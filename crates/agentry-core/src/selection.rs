// Model selection types
//
// AgentDefaults is the static, process-wide baseline for one agent role.
// ModelSelection is the fully resolved output of a per-run resolution:
// created fresh per run, never partially populated, never mutated.

use serde::{Deserialize, Serialize};

/// Backend client used to reach a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    Openai,
    Gemini,
    Litellm,
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientKind::Openai => write!(f, "openai"),
            ClientKind::Gemini => write!(f, "gemini"),
            ClientKind::Litellm => write!(f, "litellm"),
        }
    }
}

impl std::str::FromStr for ClientKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ClientKind::Openai),
            "gemini" => Ok(ClientKind::Gemini),
            "litellm" => Ok(ClientKind::Litellm),
            _ => Err(format!("Unknown client kind: {}", s)),
        }
    }
}

/// Which API surface of the client to call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiMode {
    #[default]
    Chat,
    Response,
}

impl std::fmt::Display for ApiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiMode::Chat => write!(f, "chat"),
            ApiMode::Response => write!(f, "response"),
        }
    }
}

/// Optional per-model knobs carried through resolution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Maximum tokens to generate per response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Cap on input tokens before the call is rejected or truncated upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_input_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 2.0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Tool-choice mode (e.g. "auto", "required", "none")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<String>,
}

impl ModelSettings {
    /// Field-wise merge: set fields win, unset fields fall back
    pub fn merged_with(&self, fallback: &ModelSettings) -> ModelSettings {
        ModelSettings {
            max_tokens: self.max_tokens.or(fallback.max_tokens),
            max_input_tokens: self.max_input_tokens.or(fallback.max_input_tokens),
            temperature: self.temperature.or(fallback.temperature),
            tool_choice: self
                .tool_choice
                .clone()
                .or_else(|| fallback.tool_choice.clone()),
        }
    }
}

/// Static per-agent defaults from configuration
///
/// Every field is optional at this level: a field left unset here must be
/// supplied by an override or by provider routing, otherwise resolution
/// fails for that agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentDefaults {
    /// Default model, possibly a symbolic alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_mode: Option<ApiMode>,

    #[serde(default)]
    pub settings: ModelSettings,
}

/// Fully resolved configuration for one agent in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSelection {
    /// Agent this selection was resolved for
    pub agent: String,
    /// Concrete model identifier (all aliases resolved)
    pub model: String,
    pub client: ClientKind,
    pub api_mode: ApiMode,
    #[serde(default)]
    pub settings: ModelSettings,
}
