//! nextcontest CLI entry point.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use nextcontest_core::{TracingConfig, init_tracing, now_in_reference};
use nextcontest_sources::{aggregate, build_sources, http};

use nextcontest_cli::cli::Cli;
use nextcontest_cli::error::CliResult;
use nextcontest_cli::{output, readme};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing_config = if cli.debug {
        TracingConfig::debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let client = http::build_client(Duration::from_secs(cli.timeout))?;
    let sources = build_sources(&client, &cli.platforms());

    let outcome = aggregate(&sources).await;
    for report in &outcome.reports {
        if report.is_failed() {
            warn!(platform = %report.platform, "source contributed nothing this run");
        } else {
            info!(platform = %report.platform, count = report.count(), "source fetched");
        }
    }

    output::write_schedule(&cli.out_dir, &outcome.records)?;

    if let Some(ref path) = cli.readme {
        readme::update_readme(path, &now_in_reference())?;
    }

    info!(total = outcome.records.len(), "schedule written");
    Ok(())
}
