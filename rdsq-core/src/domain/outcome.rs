// rdsq-core/src/domain/outcome.rs

use super::contract::NO_RESULTS_MESSAGE;
use super::envelope::ResultEnvelope;

/// What a successful invocation produced. Failures travel on the `Err` side.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The command returned a `records` array (possibly empty).
    Tabular(ResultEnvelope),
    /// Nothing to tabulate; the message is shown as-is.
    Notice(String),
}

impl Outcome {
    pub fn no_results() -> Self {
        Outcome::Notice(NO_RESULTS_MESSAGE.to_string())
    }
}
