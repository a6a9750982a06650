use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trisum_client::{
    cli::{read_input, Cli, Command},
    view, HttpSummaryApi, SubmitOutcome, SummaryController,
};
use trisum_quota::{FileUsageStore, QuotaTracker};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let usage_path = cli
        .usage_file
        .or_else(FileUsageStore::default_path)
        .context("No data directory found; pass --usage-file")?;
    tracing::debug!("Usage record at {}", usage_path.display());
    let tracker = QuotaTracker::new(FileUsageStore::new(usage_path));

    match cli.command {
        Command::Usage => {
            let status = tracker.check_usage()?;
            println!(
                "{} ({} left)",
                view::usage_line(&status, tracker.policy()),
                tracker.remaining(&status)
            );
            Ok(ExitCode::SUCCESS)
        }
        Command::Summarize { text, file } => {
            let text = read_input(text, file)?;
            let api = HttpSummaryApi::new(&cli.server_url)?;
            let policy = *tracker.policy();

            let mut controller = SummaryController::new(api, tracker)?.with_observer(move |state| {
                if state.loading {
                    eprint!("{}", view::render(state, &policy));
                }
            });

            let outcome = controller.submit(&text).await?;
            println!("{}", view::render(controller.state(), controller.policy()));

            Ok(match outcome {
                SubmitOutcome::Summarized(_) => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            })
        }
    }
}
