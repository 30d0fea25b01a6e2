// rdsq-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InvokeError {
    #[error("Missing required arguments: --sql must be provided")]
    #[diagnostic(
        code(rdsq::args::missing),
        help("Pass the statement with --sql \"SELECT ...\" alongside the usual execute-statement flags.")
    )]
    MissingArguments,

    #[error("Failed to start external command: {0}")]
    #[diagnostic(
        code(rdsq::process::spawn),
        help("Check that the AWS CLI is installed and available on your PATH.")
    )]
    SpawnFailure(String),

    #[error("External command exited with code {code}: {stderr}")]
    #[diagnostic(code(rdsq::process::exit))]
    ExternalFailure { code: i32, stderr: String },

    #[error("Failed to parse command output: {detail}\nRaw output: {raw}")]
    #[diagnostic(
        code(rdsq::output::malformed),
        help("The command succeeded but did not print a JSON result envelope.")
    )]
    MalformedOutput { detail: String, raw: String },
}
