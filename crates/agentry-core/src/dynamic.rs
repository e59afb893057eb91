// Run-scoped configuration overrides
//
// DynamicAgentConfig travels with the durable workflow input: constructed by
// the caller at workflow-start time, consumed once when the run builds its
// RunConfig, and never persisted beyond the run (it replays with the input).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::selection::{ApiMode, ClientKind, ModelSettings};

/// Per-agent override with field-level semantics
///
/// An unset field falls through to the next precedence level for that field
/// only; a set field never drags the record's other fields with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelOverride {
    /// Model override, symbolic or concrete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_mode: Option<ApiMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<ModelSettings>,
}

impl ModelOverride {
    /// Override only the model
    pub fn model(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Default::default()
        }
    }

    /// Set the client
    pub fn with_client(mut self, client: ClientKind) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the API mode
    pub fn with_api_mode(mut self, api_mode: ApiMode) -> Self {
        self.api_mode = Some(api_mode);
        self
    }

    /// Set the model settings
    pub fn with_settings(mut self, settings: ModelSettings) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Runtime configuration overrides for the agents of one workflow run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DynamicAgentConfig {
    /// Global model override applied to every agent unless shadowed per agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Extra aliases for this run; shadow static entries of the same name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub aliases: HashMap<String, String>,

    /// Per-agent overrides keyed by agent name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub agents: HashMap<String, ModelOverride>,
}

impl DynamicAgentConfig {
    /// Whether the request carries no override at all
    pub fn is_empty(&self) -> bool {
        self.model.is_none() && self.aliases.is_empty() && self.agents.is_empty()
    }

    /// Set the global model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Add a run-scoped alias
    pub fn with_alias(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(name.into(), target.into());
        self
    }

    /// Add a per-agent override
    pub fn with_agent(mut self, agent: impl Into<String>, overrides: ModelOverride) -> Self {
        self.agents.insert(agent.into(), overrides);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let config = DynamicAgentConfig::default();
        assert!(config.is_empty());
        assert_eq!(config.model, None);
        assert!(config.aliases.is_empty());
        assert!(config.agents.is_empty());
    }

    #[test]
    fn any_override_makes_it_non_empty() {
        assert!(!DynamicAgentConfig::default().with_model("gpt-4o").is_empty());
        assert!(!DynamicAgentConfig::default()
            .with_alias("fast", "gpt-4o-mini")
            .is_empty());
        assert!(!DynamicAgentConfig::default()
            .with_agent("SummaryAgent", ModelOverride::model("gpt-4o"))
            .is_empty());
    }

    #[test]
    fn unset_fields_are_omitted_from_json() {
        let config = DynamicAgentConfig::default()
            .with_agent("SummaryAgent", ModelOverride::model("claude-3-opus"));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "agents": { "SummaryAgent": { "model": "claude-3-opus" } }
            })
        );
    }

    #[test]
    fn deserializes_full_request() {
        let config: DynamicAgentConfig = serde_json::from_value(serde_json::json!({
            "model": "gpt-4o",
            "aliases": { "fast": "gpt-3.5-turbo" },
            "agents": {
                "SpecialAgent": {
                    "model": "claude-3-opus",
                    "client": "litellm",
                    "api_mode": "chat",
                    "settings": { "max_input_tokens": 8000 }
                }
            }
        }))
        .unwrap();

        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(config.aliases["fast"], "gpt-3.5-turbo");
        let agent = &config.agents["SpecialAgent"];
        assert_eq!(agent.model.as_deref(), Some("claude-3-opus"));
        assert_eq!(agent.client, Some(crate::selection::ClientKind::Litellm));
        assert_eq!(
            agent.settings.as_ref().unwrap().max_input_tokens,
            Some(8000)
        );
    }
}
