use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;

#[derive(Parser)]
#[command(name = "chores")]
#[command(about = "Project chore runner: quality checks and environment bootstrap")]
#[command(long_about = "Chores replaces the usual pile of dev shell scripts with one binary: \
                       'chores check' runs the project's quality tools in order and mirrors the \
                       first failing tool's exit code, and 'chores bootstrap' sets up the local \
                       development environment from scratch.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run quality checks (test suite, type checker, formatter, linter)
    Check {
        /// Which check to run
        #[arg(value_enum, default_value = "all", help = "Check to run: test, type, lint, or all")]
        task: Task,
    },
    /// Set up the local development environment
    Bootstrap {
        /// Recreate the environment even if it already exists
        #[arg(long, help = "Remove an existing environment and recreate it from scratch")]
        force: bool,
        /// Show what would be done without making changes
        #[arg(long, help = "Show what would be done without making changes")]
        dry_run: bool,
    },
}

/// Check selector accepted by `chores check`.
///
/// Invalid selectors are rejected at argument parsing time, before any
/// subprocess is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// Run the test suite
    Test,
    /// Run the static type checker
    Type,
    /// Run the formatter in check mode, then the linter
    Lint,
    /// Run every check in order: test, type, lint
    All,
}
