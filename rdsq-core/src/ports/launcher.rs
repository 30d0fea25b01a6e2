// rdsq-core/src/ports/launcher.rs

// What the Invoker needs from the operating system, without knowing how it's done:
// start a program with a flat list of string arguments, read its two output
// streams, then learn how it ended.

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// A readable end of a child's stdout or stderr.
pub type OutputStream = Box<dyn AsyncRead + Send + Unpin>;

/// Starts the external program. Injected into the Invoker so tests can
/// substitute a fake process.
pub trait ProcessLauncher: Send + Sync {
    /// Name of the program being started, for logs.
    fn program(&self) -> &str;

    /// Starts the program with `args`. An `Err` here is a launch-level failure
    /// (executable missing, permission denied) and no exit status will follow.
    fn launch(&self, args: &[String]) -> std::io::Result<Box<dyn RunningProcess>>;
}

/// Handle on a started process.
#[async_trait]
pub trait RunningProcess: Send {
    /// Takes the stdout stream. Returns `None` once taken.
    fn take_stdout(&mut self) -> Option<OutputStream>;

    /// Takes the stderr stream. Returns `None` once taken.
    fn take_stderr(&mut self) -> Option<OutputStream>;

    /// Waits for termination. `None` means the process ended without an
    /// exit code (killed by a signal).
    async fn wait(&mut self) -> std::io::Result<Option<i32>>;
}
