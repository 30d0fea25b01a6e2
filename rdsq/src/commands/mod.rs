// rdsq/src/commands/mod.rs

pub mod execute;
