//! `a24api`: command-line client for the Active24 DNS REST API.
//!
//! Exit status: 0 on success, 1 on usage, configuration, validation,
//! transport or decode errors, 2 when the API answers with a non-2xx status.

mod cli;
mod config;

use std::process::ExitCode;

use a24api_provider::{ApiClient, ApiError, DnsService, ExitStatus};
use clap::Parser;
use cli::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(ExitStatus::Failure.code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            report(&e);
            ExitCode::from(ExitStatus::Failure.code())
        }
    }
}

/// Log to stderr; stdout carries the report.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<ExitStatus> {
    let config = config::load(cli, |key| std::env::var(key).ok())?;
    let invocation = cli.invocation()?;
    let client = ApiClient::new(config.client_options())?;

    let outcome = DnsService::new(client).run(&invocation).await?;
    print!("{}", outcome.output);
    Ok(outcome.status)
}

fn report(error: &anyhow::Error) {
    let api_error = error.downcast_ref::<ApiError>();
    if let Some(e) = api_error {
        tracing::debug!(
            "{}",
            serde_json::to_string(e).unwrap_or_else(|_| e.to_string())
        );
    }
    eprintln!("Error: {error:#}");
    if api_error.is_some_and(ApiError::is_expected) {
        eprintln!("Run 'a24api --help' for usage.");
    }
}
