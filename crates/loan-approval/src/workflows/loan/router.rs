use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::Applicant;
use super::explanation::DecisionExplainer;
use super::process::{ExecutionResult, ProcessOrchestrator};
use super::scenarios::sample_applicants;

/// Shared handles for the loan evaluation endpoints.
#[derive(Clone)]
pub struct LoanRoutesState {
    pub orchestrator: Arc<ProcessOrchestrator>,
    pub explainer: Arc<DecisionExplainer>,
}

impl LoanRoutesState {
    pub fn new(orchestrator: Arc<ProcessOrchestrator>) -> Self {
        Self {
            orchestrator,
            explainer: Arc::new(DecisionExplainer::standard()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub name: String,
    pub age: u32,
    pub income: u64,
    pub credit_score: i32,
}

impl From<EvaluationRequest> for Applicant {
    fn from(request: EvaluationRequest) -> Self {
        Applicant::new(request.name, request.age, request.income, request.credit_score)
    }
}

/// Evaluated applicant, the process result, and the rationale shown to users.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView {
    pub applicant: Applicant,
    pub result: ExecutionResult,
    pub explanation: String,
}

/// Router builder exposing the loan evaluation endpoints.
pub fn loan_router(state: LoanRoutesState) -> Router {
    Router::new()
        .route("/api/v1/loan/evaluations", post(evaluate_handler))
        .route("/api/v1/loan/scenarios", get(scenarios_handler))
        .with_state(state)
}

pub(crate) async fn evaluate_handler(
    State(state): State<LoanRoutesState>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    let mut applicant = Applicant::from(request);
    let result = state.orchestrator.execute(&mut applicant);

    if !result.is_success() {
        let payload = json!({
            "applicant": applicant.name,
            "error": result.error_message().unwrap_or("evaluation failed"),
        });
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
    }

    let explanation = state.explainer.explain(applicant.status());
    let view = EvaluationView {
        applicant,
        result,
        explanation,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn scenarios_handler() -> Json<Vec<Applicant>> {
    Json(sample_applicants())
}
