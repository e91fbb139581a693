//! Check dispatcher
//!
//! Maps a task selector onto the ordered list of external quality tools and
//! stops at the first failure. The failing tool's exit code becomes the
//! process exit code (via `ToolFailure`); nothing after it runs.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::cli::Task;
use crate::config::{TasksConfig, ToolCommand};
use crate::external::{CommandExecutor, ToolFailure};

use super::Command;

pub struct CheckCommand {
    task: Task,
    tasks: TasksConfig,
    executor: Arc<dyn CommandExecutor>,
}

impl CheckCommand {
    pub fn new(task: Task, tasks: TasksConfig, executor: Arc<dyn CommandExecutor>) -> Self {
        Self {
            task,
            tasks,
            executor,
        }
    }

    /// Tool sequence for the selected task. Order is the contract: `all`
    /// runs test, type, then lint, and the lint task itself runs the
    /// formatter in check mode before the linter.
    fn plan(&self) -> Vec<(&'static str, &ToolCommand)> {
        match self.task {
            Task::Test => vec![("tests", &self.tasks.test)],
            Task::Type => vec![("type check", &self.tasks.typecheck)],
            Task::Lint => vec![
                ("format check", &self.tasks.format),
                ("lint", &self.tasks.lint),
            ],
            Task::All => vec![
                ("tests", &self.tasks.test),
                ("type check", &self.tasks.typecheck),
                ("format check", &self.tasks.format),
                ("lint", &self.tasks.lint),
            ],
        }
    }

    async fn run_tool(&self, label: &str, tool: &ToolCommand) -> Result<()> {
        println!("🔎 Running {} ({})", label, tool.display());
        let status = self.executor.run(&tool.program, &tool.args).await?;
        debug!(tool = label, code = status.code, "tool finished");

        if !status.success() {
            return Err(ToolFailure {
                tool: label.to_string(),
                code: status.code,
            }
            .into());
        }
        Ok(())
    }
}

impl Command for CheckCommand {
    async fn execute(&self) -> Result<()> {
        for (label, tool) in self.plan() {
            self.run_tool(label, tool).await?;
        }
        println!("✅ Checks passed");
        Ok(())
    }
}
