//! release-watch - GitHub release digest CLI tool
//!
//! Writes a markdown report of a repository's recent releases, flagging
//! changelog items that look breaking, and appends a has_releases signal
//! for CI workflows.

use clap::Parser;
use release_watch::cli::CliArgs;
use release_watch::config::WatchConfig;
use release_watch::orchestrator::Orchestrator;
use release_watch::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Console logging on stderr: RUST_LOG wins, otherwise warn (debug with --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = WatchConfig::from_cli(&args)?;
    tracing::debug!(
        repo = %config.repo,
        days = config.window_days,
        include_prereleases = config.include_prereleases,
        authenticated = config.token.is_some(),
        "starting release watch"
    );

    let orchestrator = Orchestrator::new(config)?;
    let outcome = orchestrator.run(!args.quiet).await?;

    if !args.quiet {
        let formatter = create_formatter(OutputConfig::from_cli(args.json));
        let mut stdout = io::stdout().lock();
        formatter.format(&outcome.summary, &mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}
