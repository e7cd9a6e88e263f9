use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::info;

use super::super::decision::{classify, estimate_rules_fired};
use super::super::domain::{Applicant, LoanStatus};

/// Stages logged, in order, by every simulated run.
pub const PROCESS_STAGES: [&str; 4] = [
    "Initial Validation",
    "Risk Assessment",
    "Credit Check",
    "Final Decision",
];

/// Source of identifiers for simulated process instances.
pub trait ProcessIdSource: Send + Sync {
    fn next_id(&self) -> Result<String, SimulationError>;
}

static SIMULATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Wall-clock identifiers (`sim-<millis>-<sequence>`). The sequence is shared
/// by every instance in the process, so ids never repeat even when two
/// orchestrators evaluate within the same millisecond.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockProcessIds;

impl ProcessIdSource for ClockProcessIds {
    fn next_id(&self) -> Result<String, SimulationError> {
        let millis = Utc::now().timestamp_millis();
        let millis = u64::try_from(millis)
            .map_err(|_| SimulationError::ClockBeforeEpoch { millis })?;
        let sequence = SIMULATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Ok(format!("sim-{millis}-{sequence}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("system clock reads {millis}ms, before the unix epoch")]
    ClockBeforeEpoch { millis: i64 },
}

/// Result of a simulated run before it is wrapped for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SimulatedRun {
    pub process_id: String,
    pub status: LoanStatus,
    pub rules_fired: u32,
    pub stages: Vec<String>,
}

pub(crate) fn simulate(
    ids: &dyn ProcessIdSource,
    applicant: &Applicant,
) -> Result<SimulatedRun, SimulationError> {
    let process_id = ids.next_id()?;

    let mut stages = Vec::with_capacity(PROCESS_STAGES.len());
    for (index, stage) in PROCESS_STAGES.iter().enumerate() {
        info!(%process_id, stage = index + 1, name = *stage, "process stage");
        stages.push((*stage).to_string());
    }

    let status = classify(applicant.income, applicant.credit_score);
    let rules_fired = estimate_rules_fired(applicant);

    Ok(SimulatedRun {
        process_id,
        status,
        rules_fired,
        stages,
    })
}
