// rdsq-core/src/application/mod.rs

pub mod invoke;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use rdsq_core::application::invoke;`
pub use invoke::invoke;
