use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_STORAGE_PATH: &str = "tasks.json";
const CONFIG_FILE: &str = "task-list";
const ENV_PREFIX: &str = "TASK_LIST";

/// Settings the task list reads at startup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// File the task list is loaded from and saved to
    pub storage_path: PathBuf,
}

impl Config {
    /// Loads configuration from an optional `task-list.toml` in the working directory,
    /// then from `TASK_LIST_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_sources(
            config::File::with_name(CONFIG_FILE).required(false),
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    fn from_sources<F, E>(file: F, environment: E) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .set_default("storage_path", DEFAULT_STORAGE_PATH)?
            .add_source(file)
            .add_source(environment)
            .build()?;

        settings.try_deserialize()
    }
}
