// Activity implementations
// Decision: Activities are standalone async functions so any runner mode can
// register or call them directly
//
// Workflows must stay deterministic under replay, so they never read process
// state directly: a run obtains its base configuration through the
// GetAgentConfigs activity and the snapshot travels through history.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use agentry_core::StaticConfig;

/// Activity context for heartbeat reporting
///
/// A durable runtime would provide this; the in-process runner passes a
/// no-op context.
pub struct ActivityContext {
    heartbeat_fn: Option<Box<dyn Fn(String) + Send + Sync>>,
}

impl ActivityContext {
    pub fn new() -> Self {
        Self { heartbeat_fn: None }
    }

    /// Set the heartbeat function
    pub fn with_heartbeat<F>(mut self, f: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.heartbeat_fn = Some(Box::new(f));
        self
    }

    /// Report progress (heartbeat)
    pub fn heartbeat(&self, details: &str) {
        if let Some(f) = &self.heartbeat_fn {
            f(details.to_string());
        }
    }
}

impl Default for ActivityContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the static configuration snapshot a run resolves against
pub async fn get_agent_configs_activity(
    ctx: &ActivityContext,
    config: &Arc<StaticConfig>,
) -> Result<StaticConfig> {
    ctx.heartbeat("loading agent configs");
    info!(
        agents = config.agents.len(),
        aliases = config.aliases.len(),
        "Serving agent configuration snapshot"
    );
    Ok(config.as_ref().clone())
}
