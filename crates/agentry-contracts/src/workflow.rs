// Workflow input and progress DTOs
//
// These types cross the durable-workflow boundary and must stay serializable
// so a replayed run sees exactly the payload the original run saw. The
// dynamic configuration request travels inside WorkflowInput; it is consumed
// once at run start and never persisted on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agentry_core::DynamicAgentConfig;

/// Status of one step in a workflow run, aligned with high-level durable
/// execution states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStepStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Skipped,
}

/// Identity and metadata of one durable workflow run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInfo {
    /// Workflow type name
    #[serde(default)]
    pub name: String,
    /// Workflow id
    #[serde(default)]
    pub wid: String,
    /// Run id of this execution
    #[serde(default)]
    pub run_id: String,
    #[serde(default)]
    pub namespace: String,
}

/// Input data handed to an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentInput<T> {
    /// Domain context for the agent
    pub context: T,
    /// Text handed to the LLM; accepts the legacy `input` key
    #[serde(default, alias = "input")]
    pub llm_input: String,
}

impl<T> AgentInput<T> {
    pub fn new(context: T) -> Self {
        Self {
            context,
            llm_input: String::new(),
        }
    }

    pub fn with_llm_input(mut self, llm_input: impl Into<String>) -> Self {
        self.llm_input = llm_input.into();
        self
    }
}

/// Input for an agent workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowInput<T> {
    /// The agent's input data (context and llm_input)
    pub agent_input: AgentInput<T>,

    /// Optional runtime configuration for this run (models, aliases)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_config: Option<DynamicAgentConfig>,

    /// Identity of the durable workflow run, filled in at run start
    #[serde(default)]
    pub wid: WorkflowInfo,
}

impl<T> WorkflowInput<T> {
    pub fn new(agent_input: AgentInput<T>) -> Self {
        Self {
            agent_input,
            agent_config: None,
            wid: WorkflowInfo::default(),
        }
    }

    /// Attach a dynamic configuration request to this run
    pub fn with_agent_config(mut self, config: DynamicAgentConfig) -> Self {
        self.agent_config = Some(config);
        self
    }
}

/// Timestamped record of one step status change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: String,
    pub status: WorkflowStepStatus,
    pub at: DateTime<Utc>,
}

/// Standardized progress report for a workflow run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowProgress<TResult> {
    /// Step status changes in the order they happened
    #[serde(default)]
    pub status_timeline: Vec<StepRecord>,
    /// Final result, when the run completed
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub result: Option<TResult>,
}

impl<TResult> Default for WorkflowProgress<TResult> {
    fn default() -> Self {
        Self {
            status_timeline: Vec::new(),
            result: None,
        }
    }
}
