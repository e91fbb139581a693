//! External tool abstractions
//!
//! This module provides a trait-based abstraction over subprocess execution,
//! enabling testable code through dependency injection and mock
//! implementations. The check and bootstrap commands only ever talk to the
//! outside world through this seam.

pub mod command;

pub use command::{CommandError, CommandExecutor, CommandStatus, ProcessCommandExecutor, ToolFailure};
