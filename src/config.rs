//! Connection configuration for the Vikunja API.
//!
//! Configuration is resolved on every tool invocation through a
//! [`ConfigSource`], so rotating `VIKUNJA_TOKEN` takes effect without a restart.

use std::env;

use miette::Diagnostic;
use thiserror::Error;

pub const URL_VAR: &str = "VIKUNJA_URL";
pub const TOKEN_VAR: &str = "VIKUNJA_TOKEN";
pub const DEFAULT_ASSIGNEES_VAR: &str = "VIKUNJA_DEFAULT_ASSIGNEES";
pub const STAMP_DUE_DATE_VAR: &str = "VIKUNJA_STAMP_DUE_DATE";
pub const EXCLUDED_PROJECT_VAR: &str = "VIKUNJA_EXCLUDED_PROJECT_ID";

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} environment variable is required")]
    #[diagnostic(
        code(vikunja_mcp::config::missing),
        help("Set it in the environment or in the .env file next to the server")
    )]
    Missing { name: &'static str },

    #[error("{name} has an invalid value: '{value}'")]
    #[diagnostic(code(vikunja_mcp::config::invalid))]
    Invalid { name: &'static str, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Defaults applied to every task created through the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDefaults {
    /// User ids assigned to new tasks.
    pub assignees: Vec<i64>,
    /// Set `due_date` to the creation time.
    pub stamp_due_date: bool,
}

/// Resolved connection settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub token: String,
    pub task_defaults: TaskDefaults,
    /// Project left out of the overdue listing unless the caller picks one.
    pub excluded_project_id: Option<i64>,
}

impl Config {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            task_defaults: TaskDefaults::default(),
            excluded_project_id: None,
        }
    }

    /// Build a config from a variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let base_url = get(URL_VAR).ok_or(ConfigError::Missing { name: URL_VAR })?;
        let token = get(TOKEN_VAR).ok_or(ConfigError::Missing { name: TOKEN_VAR })?;

        let assignees = match get(DEFAULT_ASSIGNEES_VAR) {
            Some(raw) => parse_ids(DEFAULT_ASSIGNEES_VAR, &raw)?,
            None => Vec::new(),
        };
        let stamp_due_date = match get(STAMP_DUE_DATE_VAR) {
            Some(raw) => parse_flag(STAMP_DUE_DATE_VAR, &raw)?,
            None => false,
        };
        let excluded_project_id = get(EXCLUDED_PROJECT_VAR)
            .map(|raw| parse_id(EXCLUDED_PROJECT_VAR, &raw))
            .transpose()?;

        let mut config = Self::new(base_url, token);
        config.task_defaults = TaskDefaults {
            assignees,
            stamp_due_date,
        };
        config.excluded_project_id = excluded_project_id;
        Ok(config)
    }
}

fn parse_id(name: &'static str, raw: &str) -> ConfigResult<i64> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: raw.to_string(),
    })
}

fn parse_ids(name: &'static str, raw: &str) -> ConfigResult<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_id(name, part))
        .collect()
}

fn parse_flag(name: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
        }),
    }
}

/// Produces a fresh [`Config`] for each tool invocation.
pub trait ConfigSource: Send + Sync + 'static {
    fn resolve(&self) -> ConfigResult<Config>;
}

/// Reads the process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfig;

impl ConfigSource for EnvConfig {
    fn resolve(&self) -> ConfigResult<Config> {
        Config::from_lookup(|name| env::var(name).ok())
    }
}

/// A fixed configuration, mostly useful in tests and embedding.
impl ConfigSource for Config {
    fn resolve(&self) -> ConfigResult<Config> {
        Ok(self.clone())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
