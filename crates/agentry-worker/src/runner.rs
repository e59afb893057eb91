// Runner mode selection
// Decision: Environment variables override the static worker settings, so a
// deployment can flip modes without editing configuration files

use agentry_core::WorkerSettings;

/// How this worker executes workflows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerMode {
    /// Workflows run inside this process, no durable engine
    InProcess,
    /// Durable execution against a Temporal server (not wired up; the
    /// worker falls back to passive mode when selected)
    Temporal,
}

impl RunnerMode {
    fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "temporal" => RunnerMode::Temporal,
            _ => RunnerMode::InProcess,
        }
    }
}

/// Runner configuration resolved from static settings and environment
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub mode: RunnerMode,
    /// Task queue this worker polls
    pub task_queue: String,
}

impl RunnerConfig {
    /// Resolve from static worker settings with environment overrides
    ///
    /// Environment variables:
    /// - `AGENTRY_RUNNER_MODE`: "inprocess" (default) or "temporal"
    /// - `AGENTRY_TASK_QUEUE`: task queue name
    pub fn from_env(settings: &WorkerSettings) -> Self {
        let mode = std::env::var("AGENTRY_RUNNER_MODE")
            .map(|raw| RunnerMode::parse(&raw))
            .unwrap_or_else(|_| RunnerMode::parse(&settings.runner_mode));
        let task_queue =
            std::env::var("AGENTRY_TASK_QUEUE").unwrap_or_else(|_| settings.task_queue.clone());
        Self { mode, task_queue }
    }
}
