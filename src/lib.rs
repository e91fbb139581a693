// Chores - project check runner and environment bootstrapper
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod external;
pub mod fs;
pub mod telemetry;

// Re-export key types for easy access
pub use cli::{Cli, Commands, Task};
pub use config::{config, ChoresConfig, ToolCommand};
pub use external::{CommandError, CommandExecutor, CommandStatus, ProcessCommandExecutor, ToolFailure};
pub use fs::{FileSystemOperations, StandardFileSystem};
pub use telemetry::{init_telemetry, shutdown_telemetry};
