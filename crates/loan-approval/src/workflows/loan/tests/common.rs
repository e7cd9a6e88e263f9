use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::loan::domain::Applicant;
use crate::workflows::loan::process::{
    EngineError, EngineEvaluation, EngineSession, ProcessEngine, ProcessIdSource,
    ProcessOrchestrator, SimulationError,
};
use crate::workflows::loan::router::LoanRoutesState;

pub(super) fn frank() -> Applicant {
    Applicant::new("Frank", 40, 80_000, 800)
}

pub(super) fn alice() -> Applicant {
    Applicant::new("Alice", 25, 15_000, 600)
}

/// How a [`ScriptedEngine`] session behaves when asked to evaluate.
#[derive(Clone)]
pub(super) enum Script {
    Succeed(EngineEvaluation),
    FailEvaluation,
    RefuseSession,
}

/// Engine double that follows a script and counts sessions.
pub(super) struct ScriptedEngine {
    script: Script,
    opened: AtomicUsize,
    released: AtomicUsize,
    disposed: AtomicUsize,
}

impl ScriptedEngine {
    pub(super) fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            opened: AtomicUsize::new(0),
            released: AtomicUsize::new(0),
            disposed: AtomicUsize::new(0),
        })
    }

    pub(super) fn succeeding(
        status: Option<&str>,
        state_code: i64,
        rules_fired: u32,
    ) -> Arc<Self> {
        Self::new(Script::Succeed(EngineEvaluation {
            process_id: "proc-7".to_string(),
            state_code,
            rules_fired,
            fired_rules: vec!["scripted rule".to_string()],
            status: status.map(str::to_string),
        }))
    }

    pub(super) fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(super) fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub(super) fn disposed(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }
}

impl ProcessEngine for ScriptedEngine {
    fn name(&self) -> &str {
        "scripted"
    }

    fn open_session(&self) -> Result<Box<dyn EngineSession + '_>, EngineError> {
        if matches!(self.script, Script::RefuseSession) {
            return Err(EngineError::SessionUnavailable("scripted refusal".to_string()));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession { engine: self }))
    }

    fn dispose(&self) {
        self.disposed.fetch_add(1, Ordering::SeqCst);
    }
}

struct ScriptedSession<'a> {
    engine: &'a ScriptedEngine,
}

impl EngineSession for ScriptedSession<'_> {
    fn evaluate(&mut self, _applicant: &Applicant) -> Result<EngineEvaluation, EngineError> {
        match &self.engine.script {
            Script::Succeed(evaluation) => Ok(evaluation.clone()),
            _ => Err(EngineError::Process {
                process_id: "proc-err".to_string(),
                reason: "scripted failure".to_string(),
            }),
        }
    }
}

impl Drop for ScriptedSession<'_> {
    fn drop(&mut self) {
        self.engine.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Process id source that always fails, forcing the simulation to abort.
pub(super) struct BrokenClock;

impl ProcessIdSource for BrokenClock {
    fn next_id(&self) -> Result<String, SimulationError> {
        Err(SimulationError::ClockBeforeEpoch { millis: -1 })
    }
}

pub(super) fn simulation_state() -> LoanRoutesState {
    LoanRoutesState::new(Arc::new(ProcessOrchestrator::simulation_only()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
