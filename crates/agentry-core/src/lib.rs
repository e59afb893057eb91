// Agent Configuration Resolution
//
// This crate resolves the concrete (model, client, settings) selection each
// agent uses for one workflow run, from three layers of configuration:
//
// - static process-wide defaults, loaded once (defaults -> file -> env)
// - an optional run-scoped override request carried with the workflow input
// - alias tables mapping symbolic model names to concrete identifiers
//
// Key design decisions:
// - Resolution is pure, synchronous, and per-run: a RunConfig snapshot is
//   built at run start and queried per agent, so concurrent runs share only
//   the read-only StaticConfig behind an Arc
// - Precedence merges field by field (per-agent override, then global model
//   override, then static defaults, then provider prefix routing), never
//   whole records
// - Alias cycles and missing required fields are fatal, non-retryable
//   errors carrying the full cycle path or the agent/field name

pub mod aliases;
pub mod dynamic;
pub mod error;
pub mod providers;
pub mod resolver;
pub mod selection;
pub mod settings;

// Re-exports for convenience
pub use aliases::AliasResolver;
pub use dynamic::{DynamicAgentConfig, ModelOverride};
pub use error::{ConfigError, Result};
pub use providers::{ProviderDefaults, ProviderMapping, ProviderRouting};
pub use resolver::RunConfig;
pub use selection::{AgentDefaults, ApiMode, ClientKind, ModelSelection, ModelSettings};
pub use settings::{StaticConfig, WorkerSettings};
