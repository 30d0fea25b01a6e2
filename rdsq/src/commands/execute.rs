// rdsq/src/commands/execute.rs
//
// USE CASE: run one statement and print what came back.

use std::io::Write;

use rdsq_core::application::invoke;
use rdsq_core::ports::ProcessLauncher;

use crate::presenter;

/// Runs the statement and renders the outcome on `out`.
/// Errors are returned untouched; `main` decides how they are shown.
pub async fn execute(
    launcher: &dyn ProcessLauncher,
    args: &[String],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let outcome = invoke(launcher, args).await?;
    presenter::render(&outcome, out)?;
    out.flush()?;
    Ok(())
}
