// Per-run configuration resolution
//
// RunConfig is the immutable snapshot one workflow run resolves against:
// the shared static configuration plus that run's dynamic overrides, with
// the run's alias overlay merged up front. Constructed once at run start,
// then queried per agent. Two runs never share a RunConfig, so concurrent
// resolutions need no coordination.

use std::sync::Arc;

use tracing::{debug, info};

use crate::aliases::AliasResolver;
use crate::dynamic::DynamicAgentConfig;
use crate::error::{ConfigError, Result};
use crate::selection::{ApiMode, ClientKind, ModelSelection, ModelSettings};
use crate::settings::StaticConfig;

/// Immutable per-run view over static defaults and dynamic overrides
#[derive(Debug, Clone)]
pub struct RunConfig {
    statics: Arc<StaticConfig>,
    dynamic: DynamicAgentConfig,
    aliases: AliasResolver,
}

impl RunConfig {
    /// Build the run snapshot, merging run-scoped aliases over static ones
    pub fn new(statics: Arc<StaticConfig>, dynamic: Option<DynamicAgentConfig>) -> Self {
        let dynamic = dynamic.unwrap_or_default();
        let aliases = AliasResolver::merged(&statics.aliases, &dynamic.aliases);
        Self {
            statics,
            dynamic,
            aliases,
        }
    }

    /// The merged alias resolver for this run
    pub fn aliases(&self) -> &AliasResolver {
        &self.aliases
    }

    /// Agent names with static defaults
    pub fn known_agents(&self) -> impl Iterator<Item = &str> {
        self.statics.agents.keys().map(String::as_str)
    }

    /// Resolve the final model selection for one agent
    ///
    /// Field-level precedence, highest first:
    /// 1. the agent's entry in the dynamic per-agent overrides
    /// 2. the dynamic global model override (model field only)
    /// 3. the agent's static defaults
    /// 4. provider prefix routing on the resolved model (client/api_mode only)
    ///
    /// Model values from any level may be symbolic and go through the merged
    /// alias table. An unresolvable required field fails with the agent and
    /// field name; alias cycles fail with the traversal path. Both are
    /// authoring errors and must not be retried.
    pub fn resolve_agent(&self, agent: &str) -> Result<ModelSelection> {
        let defaults = self.statics.agents.get(agent);
        let overrides = self.dynamic.agents.get(agent);

        let requested = overrides
            .and_then(|o| o.model.as_deref())
            .or(self.dynamic.model.as_deref())
            .or_else(|| defaults.and_then(|d| d.model.as_deref()))
            .ok_or_else(|| ConfigError::missing(agent, "model"))?;
        let model = self.aliases.resolve(requested)?;
        if model != requested {
            debug!(agent, requested, resolved = %model, "model alias resolved");
        }

        let routed = self.statics.providers.match_model(&model);

        let client = overrides
            .and_then(|o| o.client)
            .or_else(|| defaults.and_then(|d| d.client))
            .or_else(|| routed.map(|m| m.client))
            .or_else(|| self.statics.providers.default.as_ref().map(|d| d.client))
            .ok_or_else(|| ConfigError::missing(agent, "client"))?;

        let api_mode = overrides
            .and_then(|o| o.api_mode)
            .or_else(|| defaults.and_then(|d| d.api_mode))
            .or_else(|| routed.map(|m| m.api_mode))
            .or_else(|| {
                self.statics
                    .providers
                    .default
                    .as_ref()
                    .and_then(|d| d.api_mode)
            })
            .unwrap_or_default();

        let settings = match (overrides.and_then(|o| o.settings.as_ref()), defaults) {
            (Some(over), Some(def)) => over.merged_with(&def.settings),
            (Some(over), None) => over.clone(),
            (None, Some(def)) => def.settings.clone(),
            (None, None) => ModelSettings::default(),
        };

        let selection = ModelSelection {
            agent: agent.to_string(),
            model,
            client,
            api_mode,
            settings,
        };
        info!(
            agent,
            model = %selection.model,
            client = %selection.client,
            api_mode = %selection.api_mode,
            "resolved agent configuration"
        );
        Ok(selection)
    }
}
