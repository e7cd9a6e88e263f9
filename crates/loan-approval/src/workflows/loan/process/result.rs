use std::fmt;

use serde::Serialize;

use super::state::ProcessState;

pub const NOT_INITIALIZED: &str = "process orchestrator not initialized";

/// Which path produced an execution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Engine,
    Simulation,
}

impl ExecutionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ExecutionMode::Engine => "engine",
            ExecutionMode::Simulation => "simulation",
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one orchestrated evaluation.
///
/// Construct through [`ExecutionResult::completed`] or
/// [`ExecutionResult::failed`] so that a successful result always carries a
/// final status and a rules-fired count, and a failed result carries only its
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    process_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    process_state: Option<ProcessState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    execution_mode: Option<ExecutionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules_fired: Option<u32>,
    /// Stage names in simulation mode, fired rule names in engine mode.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    trail: Vec<String>,
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl ExecutionResult {
    pub fn completed(
        process_id: String,
        process_state: ProcessState,
        final_status: String,
        execution_mode: ExecutionMode,
        rules_fired: u32,
        trail: Vec<String>,
    ) -> Self {
        Self {
            process_id: Some(process_id),
            process_state: Some(process_state),
            final_status: Some(final_status),
            execution_mode: Some(execution_mode),
            rules_fired: Some(rules_fired),
            trail,
            success: true,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            process_id: None,
            process_state: None,
            final_status: None,
            execution_mode: None,
            rules_fired: None,
            trail: Vec::new(),
            success: false,
            error_message: Some(message.into()),
        }
    }

    pub fn not_initialized() -> Self {
        Self::failed(NOT_INITIALIZED)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn process_id(&self) -> Option<&str> {
        self.process_id.as_deref()
    }

    pub fn process_state(&self) -> Option<ProcessState> {
        self.process_state
    }

    pub fn execution_mode(&self) -> Option<ExecutionMode> {
        self.execution_mode
    }

    pub fn rules_fired(&self) -> Option<u32> {
        self.rules_fired
    }

    /// Stage names in simulation mode, fired rule names in engine mode.
    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    pub fn final_status(&self) -> Option<&str> {
        self.final_status.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
