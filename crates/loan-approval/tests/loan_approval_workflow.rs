//! End-to-end scenarios for the loan approval process, exercised through the
//! public orchestrator, explainer, and CSV intake only.

use std::io::Cursor;

use loan_approval::config::{EngineConfig, EngineMode};
use loan_approval::workflows::intake::ApplicantImporter;
use loan_approval::workflows::loan::{
    sample_applicants, Applicant, DecisionExplainer, ExecutionMode, ProcessOrchestrator,
    ProcessState,
};

fn rules_orchestrator() -> ProcessOrchestrator {
    ProcessOrchestrator::initialize(&EngineConfig {
        mode: EngineMode::Rules,
    })
    .expect("standard rule book loads")
}

fn simulation_orchestrator() -> ProcessOrchestrator {
    ProcessOrchestrator::initialize(&EngineConfig {
        mode: EngineMode::Disabled,
    })
    .expect("simulation needs no setup")
}

#[test]
fn sample_scenarios_through_rules_engine() {
    let orchestrator = rules_orchestrator();
    let explainer = DecisionExplainer::standard();
    let expected = [
        ("Alice", "REJECTED", 1, "Rejected: low income or poor credit"),
        ("Bob", "APPROVED", 2, "Approved: high income and good credit"),
        (
            "Charlie",
            "APPROVED_HIGH_RISK",
            1,
            "High risk approval: medium income and credit",
        ),
        (
            "Diana",
            "YOUNG_APPLICANT_REVIEW",
            2,
            "Young applicant review: applicant under 25",
        ),
        ("Eve", "REVIEW", 1, "Manual review: requires assessment"),
        ("Frank", "APPROVED", 2, "Approved: high income and good credit"),
    ];

    for (mut applicant, (name, status, fired, reason)) in
        sample_applicants().into_iter().zip(expected)
    {
        let result = orchestrator.execute(&mut applicant);

        assert_eq!(applicant.name, name);
        assert!(result.is_success(), "{name}: {:?}", result.error_message());
        assert_eq!(result.execution_mode(), Some(ExecutionMode::Engine), "{name}");
        assert_eq!(result.process_state(), Some(ProcessState::Completed), "{name}");
        assert_eq!(result.final_status(), Some(status), "{name}");
        assert_eq!(result.rules_fired(), Some(fired), "{name}");
        assert_eq!(explainer.explain(applicant.status()), reason, "{name}");
    }

    orchestrator.dispose();
}

#[test]
fn engine_process_ids_are_unique_per_run() {
    let orchestrator = rules_orchestrator();
    let mut first = Applicant::new("Bob", 35, 60_000, 750);
    let mut second = Applicant::new("Bob", 35, 60_000, 750);

    let a = orchestrator.execute(&mut first);
    let b = orchestrator.execute(&mut second);

    assert_ne!(a.process_id(), b.process_id());
}

#[test]
fn strong_applicant_end_to_end_in_simulation() {
    let orchestrator = simulation_orchestrator();
    let mut applicant = Applicant::new("Frank", 40, 80_000, 800);

    let result = orchestrator.execute(&mut applicant);

    assert!(result.is_success());
    assert_eq!(result.final_status(), Some("APPROVED"));
    assert_eq!(result.execution_mode().map(|mode| mode.as_str()), Some("simulation"));
    assert_eq!(result.rules_fired(), Some(3));
    assert_eq!(result.trail().len(), 4);
}

#[test]
fn simulation_statuses_outside_explainer_vocabulary_are_unknown() {
    let orchestrator = simulation_orchestrator();
    let explainer = DecisionExplainer::standard();
    let mut applicant = Applicant::new("Charlie", 28, 35_000, 675);

    orchestrator.execute(&mut applicant);

    assert_eq!(
        explainer.explain(applicant.status()),
        "Unknown status: CONDITIONALLY_APPROVED"
    );
}

#[test]
fn disposed_orchestrator_keeps_answering() {
    let orchestrator = rules_orchestrator();
    orchestrator.dispose();

    let mut applicant = Applicant::new("Eve", 30, 25_000, 580);
    let result = orchestrator.execute(&mut applicant);

    assert!(result.is_success());
    assert_eq!(result.execution_mode(), Some(ExecutionMode::Simulation));
    assert_eq!(result.final_status(), Some("UNDER_REVIEW"));
}

#[test]
fn imported_batch_evaluates_every_row() {
    let csv = "name,age,income,credit_score\nGrace,52,120000,810\nHank,21,18000,520\n";
    let applicants = ApplicantImporter::from_reader(Cursor::new(csv)).expect("csv parses");
    let orchestrator = rules_orchestrator();

    let statuses: Vec<String> = applicants
        .into_iter()
        .map(|mut applicant| {
            orchestrator
                .execute(&mut applicant)
                .final_status()
                .expect("successful evaluation")
                .to_string()
        })
        .collect();

    assert_eq!(statuses, vec!["APPROVED".to_string(), "REJECTED".to_string()]);
}
