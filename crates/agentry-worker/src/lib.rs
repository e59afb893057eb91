pub mod activities;
pub mod runner;
pub mod workflow;

// Re-export main types
pub use activities::{get_agent_configs_activity, ActivityContext};
pub use runner::{RunnerConfig, RunnerMode};
pub use workflow::AgentWorkflow;
