// rdsq-core/src/error.rs

use crate::domain::error::InvokeError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum RdsqError {
    // --- INVOCATION ERRORS (arguments, process, output) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Invoke(#[from] InvokeError),

    // --- PIPE / WAIT FAILURES AFTER A SUCCESSFUL START ---
    #[error("Process I/O Error: {0}")]
    #[diagnostic(
        code(rdsq::process::io),
        help("The external command started but its output could not be collected.")
    )]
    Io(#[from] std::io::Error),
}

impl RdsqError {
    /// The invocation error behind this one, if any.
    pub fn as_invoke(&self) -> Option<&InvokeError> {
        match self {
            RdsqError::Invoke(e) => Some(e),
            RdsqError::Io(_) => None,
        }
    }
}
