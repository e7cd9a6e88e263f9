use crate::demo::{run_batch, run_demo, run_evaluate, BatchArgs, DemoArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_approval::config::AppConfig;
use loan_approval::error::AppError;
use loan_approval::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Approval Process",
    about = "Evaluate loan applications through the rule book engine or the process simulation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sample applicant scenarios (default command)
    Demo(DemoArgs),
    /// Evaluate a single applicant
    Evaluate(EvaluateArgs),
    /// Evaluate every applicant in a CSV file
    Batch(BatchArgs),
    /// Start the HTTP service
    Serve(ServeArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Demo(args) => run_demo(&config, args),
        Command::Evaluate(args) => run_evaluate(&config, args),
        Command::Batch(args) => run_batch(&config, args),
        Command::Serve(args) => server::run(config, args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn demo_is_the_default_command() {
        let cli = Cli::try_parse_from(["loan-approval"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_parses_applicant_flags() {
        let cli = Cli::try_parse_from([
            "loan-approval",
            "evaluate",
            "--name",
            "Alice",
            "--age",
            "25",
            "--income",
            "15000",
            "--credit-score",
            "600",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.name, "Alice");
                assert_eq!(args.credit_score, 600);
                assert!(!args.json);
            }
            other => panic!("expected evaluate command, got {other:?}"),
        }
    }
}
