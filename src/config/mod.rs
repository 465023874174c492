//! Configuration management for galley
//!
//! Configuration is layered, lowest priority first: defaults embedded at
//! compile time, a repository config file (`galley.toml` / `.json` /
//! `.yaml` / `.yml` in the current directory), an explicit `--config` file,
//! and finally `GALLEY_*` environment variables. Later layers override
//! earlier ones key by key; the task list is replaced whole, never spliced.

use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::exec::ExecutionMode;
use crate::task::Task;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Main configuration structure for galley
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GalleyConfig {
    /// Workload and mode used by `galley run`
    pub run: RunConfig,
}

/// Run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Execution mode used when `--mode` is not given
    pub mode: ExecutionMode,

    /// Workload used when no `--task` override is given
    pub tasks: Vec<TaskConfig>,
}

/// One configured task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Task name, announced on the console
    pub name: String,

    /// How long the task takes, in whole milliseconds
    pub duration_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::Synchronized,
            tasks: vec![
                TaskConfig {
                    name: "coffee".to_string(),
                    duration_ms: 2000,
                },
                TaskConfig {
                    name: "toast".to_string(),
                    duration_ms: 3000,
                },
            ],
        }
    }
}

impl GalleyConfig {
    /// Load and validate the merged configuration.
    ///
    /// With a custom path only that file is layered over the embedded
    /// defaults; without one, repository config files in the current
    /// directory are tried in every supported format. `GALLEY_*`
    /// environment variables always win, e.g. `GALLEY_RUN_MODE=sequential`.
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            figment = figment
                .merge(Toml::file(custom_path))
                .merge(Json::file(custom_path))
                .merge(Yaml::file(custom_path));
        } else {
            figment = figment
                .merge(Toml::file("galley.toml"))
                .merge(Json::file("galley.json"))
                .merge(Yaml::file("galley.yaml"))
                .merge(Yaml::file("galley.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("GALLEY_").split("_"));

        let config: GalleyConfig = figment
            .extract()
            .context("failed to load configuration")?;
        config.validate()?;

        tracing::debug!(
            "configuration loaded: {} tasks, {} mode",
            config.run.tasks.len(),
            config.run.mode.as_str()
        );
        Ok(config)
    }

    /// The embedded default configuration, verbatim. `config init` writes
    /// this file so a fresh galley.toml starts out self-documenting.
    pub fn default_file_contents() -> &'static str {
        DEFAULT_CONFIG
    }

    /// Build the runnable workload from the configured tasks.
    pub fn workload(&self) -> Vec<Task> {
        self.run
            .tasks
            .iter()
            .map(|task| Task::from_millis(task.name.clone(), task.duration_ms))
            .collect()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        for task in &self.run.tasks {
            if task.name.trim().is_empty() {
                bail!("configured task names must not be empty");
            }
        }
        Ok(())
    }

    /// Render the merged configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("failed to render configuration as TOML")
    }
}
