// rdsq-core/src/ports/mod.rs

pub mod launcher;

pub use launcher::{OutputStream, ProcessLauncher, RunningProcess};
