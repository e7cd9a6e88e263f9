//! Loan application decisioning: the local classifier, the rule book engine,
//! and the orchestrator that chooses between them.

pub mod decision;
pub mod domain;
pub mod explanation;
pub mod process;
pub mod router;
pub mod scenarios;

#[cfg(test)]
mod tests;

pub use decision::{classify, estimate_rules_fired};
pub use domain::{Applicant, LoanStatus};
pub use explanation::DecisionExplainer;
pub use process::{
    ExecutionMode, ExecutionResult, InitializationError, ProcessOrchestrator, ProcessState,
};
pub use router::{loan_router, EvaluationRequest, EvaluationView, LoanRoutesState};
pub use scenarios::sample_applicants;
