// rdsq-core/src/infrastructure/mod.rs

pub mod process;

pub use process::TokioLauncher;
