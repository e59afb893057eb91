// Public DTOs crossing the durable-workflow boundary

pub mod parse;
pub mod workflow;

pub use parse::{parse_dynamic_config, ParseConfigError};
pub use workflow::{
    AgentInput, StepRecord, WorkflowInfo, WorkflowInput, WorkflowProgress, WorkflowStepStatus,
};

// Re-export resolution types from core so consumers need one import path
pub use agentry_core::{
    AgentDefaults, ApiMode, ClientKind, DynamicAgentConfig, ModelOverride, ModelSelection,
    ModelSettings,
};
