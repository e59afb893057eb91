// Static configuration schema and layered loading
//
// StaticConfig is loaded once at process start and shared read-only behind
// an Arc for the lifetime of the process. Concurrent runs resolve against
// the same instance; nothing in resolution mutates it. If hot reload is
// ever added, the whole Arc gets replaced, never edited in place.
//
// Layering, lowest to highest: embedded schema defaults, an optional TOML
// file, then AGENTRY_* environment variables (AGENTRY_WORKER__TASK_QUEUE
// style paths).

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::providers::ProviderRouting;
use crate::selection::AgentDefaults;

/// Embedded default configuration (compiled into the binary)
pub const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "AGENTRY";

/// Worker process settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSettings {
    /// Task queue the worker polls
    pub task_queue: String,
    /// Default runner mode ("inprocess" or "temporal")
    pub runner_mode: String,
}

impl Default for WorkerSettings {
    fn default() -> Self {
        Self {
            task_queue: "agentry-agent-runs".to_string(),
            runner_mode: "inprocess".to_string(),
        }
    }
}

/// Process-wide static configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticConfig {
    /// Per-agent defaults keyed by agent name
    #[serde(default)]
    pub agents: HashMap<String, AgentDefaults>,

    /// Static alias table (symbolic name -> target, possibly symbolic)
    #[serde(default)]
    pub aliases: HashMap<String, String>,

    /// Prefix-based provider routing
    #[serde(default)]
    pub providers: ProviderRouting,

    #[serde(default)]
    pub worker: WorkerSettings,
}

impl StaticConfig {
    /// Load layered configuration: embedded defaults, then an optional TOML
    /// file, then environment variables.
    ///
    /// With no explicit path, `config/agentry.toml` is picked up when it
    /// exists and silently skipped when it does not. An explicit path is
    /// required to exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("config/agentry").required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: StaticConfig = config.try_deserialize()?;
        info!(
            agents = loaded.agents.len(),
            aliases = loaded.aliases.len(),
            mappings = loaded.providers.mappings.len(),
            "static configuration loaded"
        );
        Ok(loaded)
    }

    /// Build from a TOML string layered over the embedded defaults
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Shareable handle for concurrent runs
    pub fn into_shared(self) -> Arc<StaticConfig> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ClientKind;

    // File and environment layering share one test: the AGENTRY_* variable
    // is process-global, so exercising both orders here keeps the sequence
    // serial and leaves no variable behind for other tests to trip on.
    #[test]
    fn load_layers_file_and_environment_over_defaults() {
        let path = std::env::temp_dir().join(format!("agentry-load-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [worker]
            task_queue = "from-file"

            [aliases]
            fast = "gpt-4o-mini"
            "#,
        )
        .unwrap();

        // file layer wins over embedded defaults
        let config = StaticConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.worker.task_queue, "from-file");
        assert_eq!(config.aliases["fast"], "gpt-4o-mini");
        // embedded provider routing survives a file that does not touch it
        assert_eq!(
            config.providers.default.as_ref().map(|d| d.client),
            Some(ClientKind::Litellm)
        );

        // environment layer wins over the file
        std::env::set_var("AGENTRY_WORKER__TASK_QUEUE", "from-env");
        let config = StaticConfig::load(Some(path.as_path())).unwrap();
        std::env::remove_var("AGENTRY_WORKER__TASK_QUEUE");
        assert_eq!(config.worker.task_queue, "from-env");
        assert_eq!(config.aliases["fast"], "gpt-4o-mini");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let missing = std::env::temp_dir().join("agentry-no-such-config.toml");
        assert!(StaticConfig::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn embedded_defaults_parse() {
        let config = StaticConfig::from_toml_str("").unwrap();
        assert!(config.agents.is_empty());
        assert!(config.aliases.is_empty());
        assert_eq!(
            config.providers.default.as_ref().map(|d| d.client),
            Some(ClientKind::Litellm)
        );
        assert_eq!(config.worker.task_queue, "agentry-agent-runs");
    }

    #[test]
    fn file_layer_overrides_embedded_defaults() {
        let config = StaticConfig::from_toml_str(
            r#"
            [worker]
            task_queue = "custom-queue"
            runner_mode = "inprocess"

            [aliases]
            fast = "gpt-4o-mini"

            [agents.SummaryAgent]
            model = "gpt-3.5-turbo"
            client = "openai"
            "#,
        )
        .unwrap();

        assert_eq!(config.worker.task_queue, "custom-queue");
        assert_eq!(config.aliases["fast"], "gpt-4o-mini");
        let agent = &config.agents["SummaryAgent"];
        assert_eq!(agent.model.as_deref(), Some("gpt-3.5-turbo"));
        assert_eq!(agent.client, Some(ClientKind::Openai));
        // Embedded provider mappings survive a file that does not touch them
        assert!(!config.providers.mappings.is_empty());
    }

    #[test]
    fn agent_settings_nest_under_the_agent_table() {
        let config = StaticConfig::from_toml_str(
            r#"
            [agents.SummaryAgent]
            model = "gpt-4o"

            [agents.SummaryAgent.settings]
            max_tokens = 4096
            temperature = 0.1
            "#,
        )
        .unwrap();

        let settings = &config.agents["SummaryAgent"].settings;
        assert_eq!(settings.max_tokens, Some(4096));
        assert_eq!(settings.temperature, Some(0.1));
    }
}
