// Agent workflow run state
//
// AgentWorkflow standardizes run initialization and progress tracking for
// workflows that execute agents. At start it layers the run's dynamic
// overrides (carried in the workflow input) over the base configuration
// snapshot, producing the RunConfig every agent invocation of this run
// resolves against. The snapshot is isolated per run: nothing here touches
// the process-wide configuration or any other run.

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use agentry_contracts::{
    StepRecord, WorkflowInput, WorkflowProgress, WorkflowStepStatus,
};
use agentry_core::{ModelSelection, RunConfig, StaticConfig};

/// Per-run workflow state with standardized progress tracking
#[derive(Debug)]
pub struct AgentWorkflow<T> {
    input: WorkflowInput<T>,
    run: RunConfig,
    timeline: Vec<StepRecord>,
    result: Option<serde_json::Value>,
}

impl<T> AgentWorkflow<T> {
    /// Initialize a run from its durable input and a base configuration
    /// snapshot (obtained through the GetAgentConfigs activity)
    pub fn start(mut input: WorkflowInput<T>, base: StaticConfig) -> Self {
        if input.wid.run_id.is_empty() {
            input.wid.run_id = Uuid::now_v7().to_string();
        }
        match &input.agent_config {
            Some(config) => info!(
                run_id = %input.wid.run_id,
                global_model = config.model.as_deref().unwrap_or("-"),
                extra_aliases = config.aliases.len(),
                agent_overrides = config.agents.len(),
                "Applying dynamic configuration for run"
            ),
            None => debug!(run_id = %input.wid.run_id, "No dynamic configuration for run"),
        }

        let run = RunConfig::new(base.into_shared(), input.agent_config.clone());
        let mut workflow = Self {
            input,
            run,
            timeline: Vec::new(),
            result: None,
        };
        workflow.update_status("Workflow Start", WorkflowStepStatus::Running);
        workflow
    }

    /// The durable input this run was started with
    pub fn input(&self) -> &WorkflowInput<T> {
        &self.input
    }

    /// The immutable configuration snapshot for this run
    pub fn run_config(&self) -> &RunConfig {
        &self.run
    }

    /// Resolve the model selection for one agent of this run
    pub fn resolve_agent(&self, agent: &str) -> agentry_core::Result<ModelSelection> {
        self.run.resolve_agent(agent)
    }

    /// Record a step status change
    pub fn update_status(&mut self, step: impl Into<String>, status: WorkflowStepStatus) {
        let step = step.into();
        debug!(run_id = %self.input.wid.run_id, step = %step, ?status, "Workflow step");
        self.timeline.push(StepRecord {
            step,
            status,
            at: Utc::now(),
        });
    }

    /// Mark the run complete with its final result
    pub fn complete(&mut self, result: serde_json::Value) {
        self.result = Some(result);
        self.update_status("Workflow Complete", WorkflowStepStatus::Completed);
    }

    /// Mark a step, and the run, as failed
    pub fn fail(&mut self, step: impl Into<String>) {
        self.update_status(step, WorkflowStepStatus::Failed);
    }

    /// Standardized progress report
    pub fn progress(&self) -> WorkflowProgress<serde_json::Value> {
        WorkflowProgress {
            status_timeline: self.timeline.clone(),
            result: self.result.clone(),
        }
    }
}
