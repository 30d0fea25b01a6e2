// rdsq-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- LAYERS ---

// 1. Ports (Interfaces / Traits)
// The process-launch capability the Invoker depends on.
pub mod ports;

// 2. Domain
// Result envelope, typed cells, outcome and the fixed invocation contract.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// The real launcher on top of tokio::process.
pub mod infrastructure;

// 4. Application (Use Cases)
// The Invoker: compose arguments, run the process, interpret its output.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::invoke;
pub use domain::{CellValue, ColumnMetadata, InvokeError, Outcome, ResultEnvelope};
pub use error::RdsqError;
pub use infrastructure::TokioLauncher;
