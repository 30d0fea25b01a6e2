// rdsq-core/src/infrastructure/process.rs

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::debug;

use crate::domain::contract::DEFAULT_PROGRAM;
use crate::ports::launcher::{OutputStream, ProcessLauncher, RunningProcess};

/// Real launcher using tokio::process. stdin is closed, stdout and stderr are piped.
#[derive(Debug, Clone)]
pub struct TokioLauncher {
    program: String,
}

impl TokioLauncher {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Launcher for another executable name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for TokioLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for TokioLauncher {
    fn program(&self) -> &str {
        &self.program
    }

    fn launch(&self, args: &[String]) -> std::io::Result<Box<dyn RunningProcess>> {
        debug!(program = %self.program, argc = args.len(), "Spawning external command");

        let child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        Ok(Box::new(TokioProcess { child }))
    }
}

struct TokioProcess {
    child: Child,
}

#[async_trait]
impl RunningProcess for TokioProcess {
    fn take_stdout(&mut self) -> Option<OutputStream> {
        self.child
            .stdout
            .take()
            .map(|s| Box::new(s) as OutputStream)
    }

    fn take_stderr(&mut self) -> Option<OutputStream> {
        self.child
            .stderr
            .take()
            .map(|s| Box::new(s) as OutputStream)
    }

    async fn wait(&mut self) -> std::io::Result<Option<i32>> {
        let status = self.child.wait().await?;
        Ok(status.code())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_program_is_aws() {
        assert_eq!(TokioLauncher::default().program(), "aws");
    }

    #[tokio::test]
    async fn test_missing_executable_fails_at_launch() {
        let launcher = TokioLauncher::with_program("rdsq-definitely-not-installed");
        let result = launcher.launch(&[]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_real_process_streams_and_exit_code() -> anyhow::Result<()> {
        let launcher = TokioLauncher::with_program("sh");
        let mut process = launcher.launch(&strings(&["-c", "printf out; printf err >&2; exit 3"]))?;

        let mut stdout = String::new();
        let mut stderr = String::new();
        if let Some(mut s) = process.take_stdout() {
            s.read_to_string(&mut stdout).await?;
        }
        if let Some(mut s) = process.take_stderr() {
            s.read_to_string(&mut stderr).await?;
        }
        assert!(process.take_stdout().is_none());

        assert_eq!(process.wait().await?, Some(3));
        assert_eq!(stdout, "out");
        assert_eq!(stderr, "err");
        Ok(())
    }
}
