use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use chores::cli::commands::bootstrap::BootstrapCommand;
use chores::cli::commands::check::CheckCommand;
use chores::cli::commands::{self, Command};
use chores::cli::{Cli, Commands};
use chores::config::{self, ChoresConfig};
use chores::external::{ProcessCommandExecutor, ToolFailure};
use chores::fs::StandardFileSystem;
use chores::telemetry::{init_telemetry, shutdown_telemetry};

fn main() {
    let cli = Cli::parse();

    let cfg = match config::config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ {e:#}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_telemetry(&cfg.log.level) {
        eprintln!("❌ Failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    let result = run(cli, cfg);
    shutdown_telemetry();

    if let Err(err) = result {
        // The first failing tool's exit code becomes our own
        if let Some(failure) = err.downcast_ref::<ToolFailure>() {
            eprintln!("❌ {failure}");
            std::process::exit(failure.code);
        }
        eprintln!("❌ {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, cfg: &ChoresConfig) -> Result<()> {
    match cli.command {
        // Default behavior: no subcommand - explain how to get started
        None => tokio::runtime::Runtime::new()?.block_on(commands::show_how_to_get_started()),
        Some(Commands::Check { task }) => tokio::runtime::Runtime::new()?.block_on(async {
            CheckCommand::new(task, cfg.tasks.clone(), Arc::new(ProcessCommandExecutor))
                .execute()
                .await
        }),
        Some(Commands::Bootstrap { force, dry_run }) => {
            tokio::runtime::Runtime::new()?.block_on(async {
                BootstrapCommand::new(
                    force,
                    dry_run,
                    cfg.environment.clone(),
                    cfg.hooks.clone(),
                    Arc::new(ProcessCommandExecutor),
                    Arc::new(StandardFileSystem),
                )
                .execute()
                .await
            })
        }
    }
}
