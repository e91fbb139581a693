//! Base command execution abstraction
//!
//! Provides the foundational trait for running external tools, enabling
//! dependency injection for testing.

use async_trait::async_trait;
use thiserror::Error;

/// Exit status of a completed external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: i32,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

#[derive(Debug, Error, Clone)]
pub enum CommandError {
    #[error("Command not found: {command}")]
    CommandNotFound { command: String },
    #[error("IO error while running {command}: {message}")]
    Io { command: String, message: String },
}

/// An external tool exited non-zero.
///
/// Carries the tool's exit code so `main` can mirror it as the process
/// exit status.
#[derive(Debug, Error)]
#[error("{tool} failed with exit code {code}")]
pub struct ToolFailure {
    pub tool: String,
    pub code: i32,
}

/// Trait for running external commands
///
/// This abstraction allows the rest of the codebase to run commands
/// without directly depending on tokio::process::Command, enabling testing
/// with mock implementations.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args`, stdio inherited from the parent process,
    /// and wait for it to finish. The caller sees whatever the tool prints.
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandStatus, CommandError>;
}

/// Real implementation using tokio::process::Command
pub struct ProcessCommandExecutor;

#[async_trait]
impl CommandExecutor for ProcessCommandExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandStatus, CommandError> {
        let status = tokio::process::Command::new(program)
            .args(args)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CommandError::CommandNotFound {
                        command: program.to_string(),
                    }
                } else {
                    CommandError::Io {
                        command: program.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        // A termination without an exit code (signal) counts as failure.
        Ok(CommandStatus {
            code: status.code().unwrap_or(1),
        })
    }
}
