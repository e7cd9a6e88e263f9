use clap::Args;
use loan_approval::config::{AppConfig, EngineConfig, EngineMode};
use loan_approval::error::AppError;
use loan_approval::workflows::intake::ApplicantImporter;
use loan_approval::workflows::loan::{
    sample_applicants, Applicant, DecisionExplainer, EvaluationView, ExecutionResult,
    InitializationError, ProcessOrchestrator,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the rules engine and run every scenario through the process simulation.
    #[arg(long)]
    pub(crate) simulate: bool,
    /// Print the process stages or fired rules behind each decision.
    #[arg(long)]
    pub(crate) show_trail: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Applicant name
    #[arg(long)]
    pub(crate) name: String,
    /// Applicant age in years
    #[arg(long)]
    pub(crate) age: u32,
    /// Annual income in currency units
    #[arg(long)]
    pub(crate) income: u64,
    /// Credit score (conventionally 300-850)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) credit_score: i32,
    /// Skip the rules engine and use the process simulation.
    #[arg(long)]
    pub(crate) simulate: bool,
    /// Emit the evaluation as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with a `name,age,income,credit_score` header
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Skip the rules engine and use the process simulation.
    #[arg(long)]
    pub(crate) simulate: bool,
    /// Print the process stages or fired rules behind each decision.
    #[arg(long)]
    pub(crate) show_trail: bool,
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    println!("=== Loan approval process ===\n");
    let orchestrator = ProcessOrchestrator::initialize(&engine_config(config.engine, args.simulate));
    evaluate_all(orchestrator, sample_applicants(), args.show_trail)
}

pub(crate) fn run_batch(config: &AppConfig, args: BatchArgs) -> Result<(), AppError> {
    let applicants = ApplicantImporter::from_path(&args.csv)?;
    println!(
        "=== Loan approval batch: {} ({} applicants) ===\n",
        args.csv.display(),
        applicants.len()
    );
    let orchestrator = ProcessOrchestrator::initialize(&engine_config(config.engine, args.simulate));
    evaluate_all(orchestrator, applicants, args.show_trail)
}

pub(crate) fn run_evaluate(config: &AppConfig, args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs {
        name,
        age,
        income,
        credit_score,
        simulate,
        json,
    } = args;

    let orchestrator = ProcessOrchestrator::initialize(&engine_config(config.engine, simulate))?;
    let explainer = DecisionExplainer::standard();
    let mut applicant = Applicant::new(name, age, income, credit_score);
    let result = orchestrator.execute(&mut applicant);
    orchestrator.dispose();

    let succeeded = result.is_success();
    if json {
        let explanation = explainer.explain(applicant.status());
        let view = EvaluationView {
            applicant,
            result,
            explanation,
        };
        let rendered = serde_json::to_string_pretty(&view).map_err(std::io::Error::from)?;
        println!("{rendered}");
    } else {
        render_evaluation(&applicant, &result, &explainer, true);
    }

    if succeeded {
        Ok(())
    } else {
        Err(AppError::EvaluationsFailed {
            failed: 1,
            total: 1,
        })
    }
}

fn engine_config(configured: EngineConfig, simulate: bool) -> EngineConfig {
    if simulate {
        EngineConfig {
            mode: EngineMode::Disabled,
        }
    } else {
        configured
    }
}

/// Evaluate applicants one after another and dispose the orchestrator at the
/// end. An orchestrator that failed to initialize yields a failed result for
/// every applicant.
fn evaluate_all(
    orchestrator: Result<ProcessOrchestrator, InitializationError>,
    applicants: Vec<Applicant>,
    show_trail: bool,
) -> Result<(), AppError> {
    if let Err(err) = &orchestrator {
        eprintln!("Orchestrator initialization failed: {err}");
    }

    let explainer = DecisionExplainer::standard();
    let total = applicants.len();
    let mut failed = 0;

    for mut applicant in applicants {
        let result = match &orchestrator {
            Ok(orchestrator) => orchestrator.execute(&mut applicant),
            Err(_) => ExecutionResult::not_initialized(),
        };
        if !render_evaluation(&applicant, &result, &explainer, show_trail) {
            failed += 1;
        }
        println!();
    }

    if let Ok(orchestrator) = &orchestrator {
        orchestrator.dispose();
    }

    if failed > 0 {
        return Err(AppError::EvaluationsFailed { failed, total });
    }
    Ok(())
}

/// Print one evaluation. Returns whether it succeeded.
fn render_evaluation(
    applicant: &Applicant,
    result: &ExecutionResult,
    explainer: &DecisionExplainer,
    show_trail: bool,
) -> bool {
    println!("--- {} ---", applicant.name);
    println!(
        "Applicant: {} (Age: {}, Income: ${}, Credit: {})",
        applicant.name, applicant.age, applicant.income, applicant.credit_score
    );

    if !result.is_success() {
        eprintln!(
            "Process failed: {}",
            result.error_message().unwrap_or("unknown error")
        );
        return false;
    }

    println!("Decision: {}", result.final_status().unwrap_or("-"));
    println!(
        "Process: {} ({}) | Mode: {} | Rules fired: {}",
        result
            .process_state()
            .map(|state| state.label())
            .unwrap_or_else(|| "-".to_string()),
        result.process_id().unwrap_or("-"),
        result
            .execution_mode()
            .map(|mode| mode.as_str())
            .unwrap_or("-"),
        result.rules_fired().unwrap_or_default()
    );
    if show_trail {
        for (index, step) in result.trail().iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
    }
    println!("Reason: {}", explainer.explain(applicant.status()));
    true
}
