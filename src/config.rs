use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for chores
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChoresConfig {
    /// Virtual environment settings used by bootstrap
    pub environment: EnvironmentConfig,
    /// Tool command lines used by the check dispatcher
    pub tasks: TasksConfig,
    /// Version-control hook settings used by bootstrap
    pub hooks: HooksConfig,
    /// Logging settings
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    /// Directory holding the project-local virtual environment
    pub dir: String,
    /// Interpreter used to create the environment
    pub python: String,
    /// Development dependency manifest consumed by the installer
    pub manifest: String,
}

impl EnvironmentConfig {
    /// Path of the interpreter inside the environment
    pub fn env_python(&self) -> String {
        self.env_bin("python")
    }

    /// Path of a tool installed inside the environment
    pub fn env_bin(&self, tool: &str) -> String {
        if cfg!(windows) {
            format!("{}\\Scripts\\{}.exe", self.dir, tool)
        } else {
            format!("{}/bin/{}", self.dir, tool)
        }
    }
}

/// A single external tool invocation: program plus arguments
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Human-readable command line for progress output
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TasksConfig {
    /// Test runner
    pub test: ToolCommand,
    /// Static type checker
    pub typecheck: ToolCommand,
    /// Formatter, invoked in check mode
    pub format: ToolCommand,
    /// Linter
    pub lint: ToolCommand,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HooksConfig {
    /// Pre-commit hook installer, resolved inside the environment's bin
    /// directory at bootstrap time
    pub installer: ToolCommand,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Default log level when RUST_LOG is not set
    pub level: String,
}

impl Default for ChoresConfig {
    fn default() -> Self {
        Self {
            environment: EnvironmentConfig {
                dir: ".venv".to_string(),
                python: "python3".to_string(),
                manifest: "requirements-dev.txt".to_string(),
            },
            tasks: TasksConfig {
                test: ToolCommand::new("pytest", &[]),
                typecheck: ToolCommand::new("mypy", &["src", "tests"]),
                format: ToolCommand::new("ruff", &["format", "--check", "."]),
                lint: ToolCommand::new("ruff", &["check", "."]),
            },
            hooks: HooksConfig {
                installer: ToolCommand::new("pre-commit", &["install"]),
            },
            log: LogConfig {
                level: "warn".to_string(),
            },
        }
    }
}

impl ChoresConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (chores.toml in the working directory)
    /// 3. Environment variables (prefixed with CHORES_)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&ChoresConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("chores.toml").exists() {
            builder = builder.add_source(File::with_name("chores"));
        }

        // Override with environment variables
        builder = builder.add_source(
            Environment::with_prefix("CHORES")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::debug!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ChoresConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = ChoresConfig::load_env_file();
        ChoresConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ChoresConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_task_commands() {
        let config = ChoresConfig::default();
        assert_eq!(config.tasks.test.program, "pytest");
        assert_eq!(config.tasks.typecheck.program, "mypy");
        assert_eq!(config.tasks.format.args, vec!["format", "--check", "."]);
        assert_eq!(config.tasks.lint.args, vec!["check", "."]);
    }

    #[test]
    fn test_env_bin_resolves_inside_environment() {
        let environment = ChoresConfig::default().environment;
        let hook = environment.env_bin("pre-commit");
        if cfg!(windows) {
            assert_eq!(hook, ".venv\\Scripts\\pre-commit.exe");
        } else {
            assert_eq!(hook, ".venv/bin/pre-commit");
        }
    }

    #[test]
    fn test_tool_command_display() {
        assert_eq!(ToolCommand::new("pytest", &[]).display(), "pytest");
        assert_eq!(
            ToolCommand::new("mypy", &["src", "tests"]).display(),
            "mypy src tests"
        );
    }
}
