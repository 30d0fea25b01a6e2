// rdsq-core/src/domain/mod.rs

pub mod contract;
pub mod envelope;
pub mod error;
pub mod outcome;

// Re-exports to keep imports short elsewhere
pub use contract::{
    ACTION, DEFAULT_PROGRAM, INCLUDE_METADATA_FLAG, NO_RESULTS_MESSAGE, REQUIRED_FLAG, SUBCOMMAND,
};
pub use envelope::{CellValue, ColumnMetadata, ResultEnvelope};
pub use error::InvokeError;
pub use outcome::Outcome;
