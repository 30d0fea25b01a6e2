// rdsq/src/main.rs

mod cli;
mod commands;
mod presenter;

use std::process::ExitCode;

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use rdsq_core::{RdsqError, TokioLauncher};

#[tokio::main]
async fn main() -> ExitCode {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug rdsq --sql ... to follow the subprocess. Logs go to stderr,
    // stdout only carries results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let launcher = TokioLauncher::new();
    let mut stdout = std::io::stdout().lock();

    match commands::execute::execute(&launcher, &cli.args, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Prints the error and, for known failures, the hint attached to it.
fn report(err: &anyhow::Error) {
    eprintln!("❌ {}", err);
    if let Some(help) = err.downcast_ref::<RdsqError>().and_then(|e| e.help()) {
        eprintln!("👉 {}", help);
    }
}
