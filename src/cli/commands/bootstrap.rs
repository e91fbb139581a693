//! Bootstrap sequencer
//!
//! Idempotently sets up the project-local development environment: create
//! the virtual environment only if absent, upgrade the package installer,
//! install development dependencies from the manifest, and register the
//! pre-commit hook. Steps run in that order and the first failure aborts
//! the whole sequence, with no rollback.
//!
//! The existence check on the environment directory is best-effort
//! idempotence, not a concurrency-safe guard.

use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::config::{EnvironmentConfig, HooksConfig};
use crate::external::{CommandExecutor, ToolFailure};
use crate::fs::FileSystemOperations;

use super::Command;

pub struct BootstrapCommand {
    force: bool,
    dry_run: bool,
    environment: EnvironmentConfig,
    hooks: HooksConfig,
    executor: Arc<dyn CommandExecutor>,
    fs_ops: Arc<dyn FileSystemOperations>,
}

impl BootstrapCommand {
    pub fn new(
        force: bool,
        dry_run: bool,
        environment: EnvironmentConfig,
        hooks: HooksConfig,
        executor: Arc<dyn CommandExecutor>,
        fs_ops: Arc<dyn FileSystemOperations>,
    ) -> Self {
        Self {
            force,
            dry_run,
            environment,
            hooks,
            executor,
            fs_ops,
        }
    }

    fn print_plan(&self) {
        let env = &self.environment;
        if self.fs_ops.exists(&env.dir) && !self.force {
            println!("Would skip creating {} (already exists)", env.dir);
        } else {
            if self.fs_ops.exists(&env.dir) {
                println!("Would remove the existing environment at {}", env.dir);
            }
            println!("Would create a virtual environment at {}", env.dir);
        }
        println!("Would upgrade the package installer");
        println!("Would install development dependencies from {}", env.manifest);
        println!("Would register the pre-commit hook");
    }

    async fn run_step(&self, label: &str, program: &str, args: &[String]) -> Result<()> {
        debug!(step = label, program, "running bootstrap step");
        let status = self.executor.run(program, args).await?;

        if !status.success() {
            return Err(ToolFailure {
                tool: label.to_string(),
                code: status.code,
            }
            .into());
        }
        Ok(())
    }

    async fn ensure_environment(&self) -> Result<()> {
        let env = &self.environment;

        if self.fs_ops.exists(&env.dir) {
            if !self.force {
                println!("⏭️  Environment {} already exists, skipping creation", env.dir);
                return Ok(());
            }
            println!("🗑️  Removing existing environment at {}", env.dir);
            self.fs_ops.remove_dir_all(&env.dir).await?;
        }

        println!("🐍 Creating virtual environment at {}", env.dir);
        self.run_step(
            "environment creation",
            &env.python,
            &["-m".to_string(), "venv".to_string(), env.dir.clone()],
        )
        .await
    }

    async fn upgrade_installer(&self) -> Result<()> {
        println!("📦 Upgrading the package installer");
        self.run_step(
            "installer upgrade",
            &self.environment.env_python(),
            &[
                "-m".to_string(),
                "pip".to_string(),
                "install".to_string(),
                "--upgrade".to_string(),
                "pip".to_string(),
            ],
        )
        .await
    }

    async fn install_dependencies(&self) -> Result<()> {
        let env = &self.environment;
        println!("📦 Installing development dependencies from {}", env.manifest);
        self.run_step(
            "dependency installation",
            &env.env_python(),
            &[
                "-m".to_string(),
                "pip".to_string(),
                "install".to_string(),
                "-r".to_string(),
                env.manifest.clone(),
            ],
        )
        .await
    }

    async fn register_hook(&self) -> Result<()> {
        let installer = &self.hooks.installer;
        println!("🪝 Registering the pre-commit hook");
        self.run_step(
            "hook registration",
            &self.environment.env_bin(&installer.program),
            &installer.args,
        )
        .await
    }

    fn print_completion(&self) {
        println!();
        println!("🎉 Bootstrap complete!");
        println!();
        println!("Next steps:");
        println!("  ✅ chores check                  # Run every quality check");
        println!(
            "  🐚 source {}/bin/activate       # Use the environment directly",
            self.environment.dir
        );
    }
}

impl Command for BootstrapCommand {
    async fn execute(&self) -> Result<()> {
        if self.dry_run {
            self.print_plan();
            return Ok(());
        }

        self.ensure_environment().await?;
        self.upgrade_installer().await?;
        self.install_dependencies().await?;
        self.register_hook().await?;
        self.print_completion();
        Ok(())
    }
}
