// rdsq-core/src/application/invoke.rs
//
// USE CASE: run one statement through the external command and interpret
// what it printed.

use std::time::Instant;
use tokio::io::AsyncReadExt;
use tracing::{debug, instrument, trace};

use crate::domain::contract::{compose_args, has_required_flag};
use crate::domain::envelope::ResultEnvelope;
use crate::domain::error::InvokeError;
use crate::domain::outcome::Outcome;
use crate::error::RdsqError;
use crate::ports::launcher::{OutputStream, ProcessLauncher};

const READ_CHUNK: usize = 8 * 1024;

/// Runs the external command with the fixed selectors followed by `args`,
/// waits for it to exit and turns its output into an [`Outcome`].
///
/// Nothing is launched when `args` lacks a `--sql` entry.
#[instrument(skip(launcher, args), fields(program = launcher.program(), argc = args.len()))]
pub async fn invoke(launcher: &dyn ProcessLauncher, args: &[String]) -> Result<Outcome, RdsqError> {
    if !has_required_flag(args) {
        return Err(InvokeError::MissingArguments.into());
    }

    let composed = compose_args(args);
    trace!(args = ?composed, "Composed argument list");

    let start = Instant::now();
    let mut process = launcher
        .launch(&composed)
        .map_err(|e| InvokeError::SpawnFailure(e.to_string()))?;

    let (stdout, stderr) = tokio::try_join!(
        drain("stdout", process.take_stdout()),
        drain("stderr", process.take_stderr()),
    )?;
    // Signal termination has no code; report it like any other failure.
    let code = process.wait().await?.unwrap_or(-1);
    debug!(code, elapsed = ?start.elapsed(), "External command exited");

    interpret(code, stdout, stderr)
}

/// Reads a stream to its end, chunk by chunk.
async fn drain(name: &'static str, stream: Option<OutputStream>) -> std::io::Result<String> {
    let Some(mut stream) = stream else {
        return Ok(String::new());
    };

    let mut collected = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        trace!(stream = name, bytes = n, "Received output chunk");
        collected.extend_from_slice(&chunk[..n]);
    }

    // Decode once at the end so multi-byte characters split across chunks survive.
    Ok(String::from_utf8_lossy(&collected).into_owned())
}

fn interpret(code: i32, stdout: String, stderr: String) -> Result<Outcome, RdsqError> {
    if code != 0 {
        return Err(InvokeError::ExternalFailure { code, stderr }.into());
    }

    if stdout.trim().is_empty() {
        return Ok(Outcome::no_results());
    }

    let document: serde_json::Value =
        serde_json::from_str(&stdout).map_err(|e| InvokeError::MalformedOutput {
            detail: e.to_string(),
            raw: stdout.clone(),
        })?;

    if let Some(updated) = document.get("numberOfRecordsUpdated") {
        debug!(%updated, "Records updated");
    }

    match ResultEnvelope::from_json(&document) {
        Ok(Some(envelope)) => {
            debug!(rows = envelope.row_count(), "Statement returned records");
            Ok(Outcome::Tabular(envelope))
        }
        Ok(None) => Ok(Outcome::no_results()),
        Err(e) => Err(InvokeError::MalformedOutput {
            detail: e.to_string(),
            raw: stdout,
        }
        .into()),
    }
}
