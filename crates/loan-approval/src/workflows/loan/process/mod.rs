mod engine;
mod orchestrator;
mod result;
mod rules;
mod simulation;
mod state;

pub use engine::{EngineError, EngineEvaluation, EngineSession, ProcessEngine};
pub use orchestrator::{InitializationError, ProcessOrchestrator};
pub use result::{ExecutionMode, ExecutionResult, NOT_INITIALIZED};
pub use rules::{Firing, Rule, RuleBook, RuleBookError, RuleCondition, RulesEngine};
pub use simulation::{ClockProcessIds, ProcessIdSource, SimulationError, PROCESS_STAGES};
pub use state::ProcessState;
