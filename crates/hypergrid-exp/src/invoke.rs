use std::process::Command;

use serde::{Deserialize, Serialize};

/// Outcome of one external invocation.
///
/// Failures are values, never errors: the driver records them and always
/// advances to the next combination. Exit codes and output of the child are
/// otherwise uninspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvocationOutcome {
    /// The child process exited with status zero.
    Completed,
    /// The child process exited non-zero or was terminated by a signal.
    Failed {
        /// Exit code when the process exited; `None` on signal termination.
        exit_code: Option<i32>,
    },
    /// The child process could not be spawned at all.
    LaunchFailed {
        /// OS-level error description.
        message: String,
    },
}

impl InvocationOutcome {
    /// Short status label used in report summaries.
    pub fn label(&self) -> &'static str {
        match self {
            InvocationOutcome::Completed => "completed",
            InvocationOutcome::Failed { .. } => "failed",
            InvocationOutcome::LaunchFailed { .. } => "launch_failed",
        }
    }
}

/// Executes one rendered command line, blocking until the child exits.
pub trait JobRunner {
    /// Runs the command to completion and reports its outcome.
    fn run(&self, command: &str) -> InvocationOutcome;
}

/// Runs commands through `sh -c`, inheriting stdout and stderr from the
/// driver process. Blocks on the child's exit status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl JobRunner for ShellRunner {
    fn run(&self, command: &str) -> InvocationOutcome {
        match Command::new("sh").arg("-c").arg(command).status() {
            Ok(status) if status.success() => InvocationOutcome::Completed,
            Ok(status) => InvocationOutcome::Failed {
                exit_code: status.code(),
            },
            Err(err) => InvocationOutcome::LaunchFailed {
                message: err.to_string(),
            },
        }
    }
}
