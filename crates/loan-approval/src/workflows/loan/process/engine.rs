use super::super::domain::Applicant;

/// Rules/process engine the orchestrator can delegate to.
///
/// Engines hand out one session per evaluation. Sessions release whatever
/// they hold when dropped, so a session never outlives the evaluation that
/// opened it, whichever way that evaluation ends.
pub trait ProcessEngine: Send + Sync {
    fn name(&self) -> &str;

    fn open_session(&self) -> Result<Box<dyn EngineSession + '_>, EngineError>;

    /// Release engine-wide resources. Later sessions are refused.
    fn dispose(&self) {}
}

/// Single-use evaluation scope opened by a [`ProcessEngine`].
pub trait EngineSession {
    fn evaluate(&mut self, applicant: &Applicant) -> Result<EngineEvaluation, EngineError>;
}

/// What an engine reports back for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvaluation {
    pub process_id: String,
    pub state_code: i64,
    pub rules_fired: u32,
    pub fired_rules: Vec<String>,
    /// Decision written by the engine, if any rule produced one.
    pub status: Option<String>,
}

/// Failure raised by an engine during a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("engine '{0}' has been disposed")]
    Disposed(String),
    #[error("engine session unavailable: {0}")]
    SessionUnavailable(String),
    #[error("no rule matched applicant '{applicant}'")]
    NothingFired { applicant: String },
    #[error("process '{process_id}' failed: {reason}")]
    Process { process_id: String, reason: String },
}
