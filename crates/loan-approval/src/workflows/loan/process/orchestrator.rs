use std::sync::Arc;

use metrics::counter;
use tracing::{info, warn};

use super::super::domain::Applicant;
use super::engine::{EngineError, EngineEvaluation, ProcessEngine};
use super::result::{ExecutionMode, ExecutionResult};
use super::rules::{Rule, RuleBook, RuleBookError, RulesEngine};
use super::simulation::{simulate, ClockProcessIds, ProcessIdSource};
use super::state::ProcessState;
use crate::config::{EngineConfig, EngineMode};

const DEFAULT_ENGINE_STATUS: &str = "COMPLETED";

/// Runs loan applications through the engine, falling back to a local
/// simulation whenever the engine is absent or fails.
///
/// `execute` never returns an error: every failure is encoded in the
/// [`ExecutionResult`] it produces.
pub struct ProcessOrchestrator {
    engine: Option<Arc<dyn ProcessEngine>>,
    process_ids: Arc<dyn ProcessIdSource>,
}

impl ProcessOrchestrator {
    /// Build an orchestrator for the configured engine mode.
    pub fn initialize(config: &EngineConfig) -> Result<Self, InitializationError> {
        let orchestrator = match config.mode {
            EngineMode::Rules => {
                let book = RuleBook::standard()?;
                Self::with_engine(Arc::new(RulesEngine::new(book)))
            }
            EngineMode::Disabled => Self::simulation_only(),
        };

        info!(
            engine = orchestrator.engine_name().unwrap_or("none"),
            "loan approval orchestrator initialized"
        );
        Ok(orchestrator)
    }

    /// Build an orchestrator around a custom rule set.
    pub fn from_rules(rules: Vec<Rule>) -> Result<Self, InitializationError> {
        let book = RuleBook::new(rules)?;
        Ok(Self::with_engine(Arc::new(RulesEngine::new(book))))
    }

    pub fn with_engine(engine: Arc<dyn ProcessEngine>) -> Self {
        Self {
            engine: Some(engine),
            process_ids: Arc::new(ClockProcessIds::default()),
        }
    }

    pub fn simulation_only() -> Self {
        Self {
            engine: None,
            process_ids: Arc::new(ClockProcessIds::default()),
        }
    }

    pub fn with_process_ids(mut self, process_ids: Arc<dyn ProcessIdSource>) -> Self {
        self.process_ids = process_ids;
        self
    }

    pub fn engine_name(&self) -> Option<&str> {
        self.engine.as_deref().map(|engine| engine.name())
    }

    /// Evaluate an applicant and record the decision on it.
    pub fn execute(&self, applicant: &mut Applicant) -> ExecutionResult {
        if let Some(engine) = self.engine.as_deref() {
            match evaluate_with_engine(engine, applicant) {
                Ok(evaluation) => return self.complete_from_engine(applicant, evaluation),
                Err(err) => warn!(
                    engine = engine.name(),
                    applicant = %applicant.name,
                    error = %err,
                    "engine evaluation failed, running process simulation"
                ),
            }
        }

        self.complete_from_simulation(applicant)
    }

    /// Release the engine. Evaluations after this run as simulations.
    pub fn dispose(&self) {
        if let Some(engine) = self.engine.as_deref() {
            engine.dispose();
            info!(engine = engine.name(), "loan approval orchestrator disposed");
        }
    }

    fn complete_from_engine(
        &self,
        applicant: &mut Applicant,
        evaluation: EngineEvaluation,
    ) -> ExecutionResult {
        let EngineEvaluation {
            process_id,
            state_code,
            rules_fired,
            fired_rules,
            status,
        } = evaluation;

        let state = ProcessState::from_code(state_code);
        let status = status.unwrap_or_else(|| DEFAULT_ENGINE_STATUS.to_string());
        applicant.record_status(status.clone());

        info!(
            %process_id,
            applicant = %applicant.name,
            %state,
            rules_fired,
            %status,
            "engine evaluation completed"
        );
        counter!("loan_evaluations_total", "mode" => ExecutionMode::Engine.as_str()).increment(1);

        ExecutionResult::completed(
            process_id,
            state,
            status,
            ExecutionMode::Engine,
            rules_fired,
            fired_rules,
        )
    }

    fn complete_from_simulation(&self, applicant: &mut Applicant) -> ExecutionResult {
        match simulate(self.process_ids.as_ref(), applicant) {
            Ok(run) => {
                applicant.record_status(run.status.as_str());
                info!(
                    process_id = %run.process_id,
                    applicant = %applicant.name,
                    status = %run.status,
                    rules_fired = run.rules_fired,
                    "process simulation completed"
                );
                counter!(
                    "loan_evaluations_total",
                    "mode" => ExecutionMode::Simulation.as_str()
                )
                .increment(1);

                ExecutionResult::completed(
                    run.process_id,
                    ProcessState::Completed,
                    run.status.as_str().to_string(),
                    ExecutionMode::Simulation,
                    run.rules_fired,
                    run.stages,
                )
            }
            Err(err) => {
                warn!(applicant = %applicant.name, error = %err, "process simulation failed");
                counter!("loan_evaluation_failures_total").increment(1);
                ExecutionResult::failed(format!("process simulation failed: {err}"))
            }
        }
    }
}

/// The session lives only for this call and is released when it returns.
fn evaluate_with_engine(
    engine: &dyn ProcessEngine,
    applicant: &Applicant,
) -> Result<EngineEvaluation, EngineError> {
    let mut session = engine.open_session()?;
    let evaluation = session.evaluate(applicant)?;

    if evaluation.rules_fired == 0 {
        return Err(EngineError::NothingFired {
            applicant: applicant.name.clone(),
        });
    }

    Ok(evaluation)
}

/// Engine setup failure. An orchestrator is never built in this case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    #[error("rule book rejected: {0}")]
    RuleBook(#[from] RuleBookError),
}
