//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Global config: `$XDG_CONFIG_HOME/mbta/mbta.yaml`
//! 2. Local config: `$MBTA_CONFIG`, or `./mbta.yaml` in the working directory
//! 3. Environment variables: `MBTA_*` prefix
//!
//! Both endpoint URLs are required; loading fails before any command runs
//! if either is missing.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::application::{ApplicationError, ApplicationResult};

/// Environment variable naming an explicit local config file.
pub const CONFIG_ENV_VAR: &str = "MBTA_CONFIG";

/// Default local config file name.
pub const DEFAULT_CONFIG_FILE: &str = "mbta.yaml";

const ENV_PREFIX: &str = "MBTA";

/// Endpoint URLs for the two queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// "list lines" URL (`get_lines`)
    pub list_lines_url: String,
    /// "list stops" URL (`get_stops`)
    pub list_stops_url: String,
}

/// Settings for one process run. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoints: Endpoints,
    /// Transport timeout in seconds (default: the HTTP client's own)
    pub timeout_secs: Option<u64>,
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub get_lines: Option<String>,
    /// Legacy name for `get_lines`; `get_lines` wins when both are set
    pub get_routes: Option<String>,
    pub get_stops: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl RawSettings {
    /// Check required keys and build the final settings.
    pub fn validate(self) -> ApplicationResult<Settings> {
        let list_lines_url = required("get_lines", self.get_lines.or(self.get_routes))?;
        let list_stops_url = required("get_stops", self.get_stops)?;
        Ok(Settings {
            endpoints: Endpoints {
                list_lines_url,
                list_stops_url,
            },
            timeout_secs: self.timeout_secs,
        })
    }
}

fn required(key: &str, value: Option<String>) -> ApplicationResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        Some(_) => Err(ApplicationError::Config {
            message: format!("'{}' must not be empty", key),
        }),
        None => Err(ApplicationError::Config {
            message: format!("missing required key '{}'", key),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Get the XDG config directory for mbta.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "mbta").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE))
}

/// Get the path to the local config file: `$MBTA_CONFIG` or `./mbta.yaml`.
pub fn local_config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

impl Settings {
    /// Transport timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Load settings with layered precedence from the standard locations.
    pub fn load() -> ApplicationResult<Self> {
        let mut files = Vec::new();
        if let Some(global) = global_config_path() {
            files.push(global);
        }
        files.push(local_config_path());

        Self::load_from(&files, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings from explicit files (lowest precedence first) plus an environment source.
    ///
    /// Missing files are skipped; a file that exists but cannot be parsed is an error.
    pub fn load_from(files: &[PathBuf], env: Environment) -> ApplicationResult<Self> {
        let mut builder = Config::builder();
        for path in files {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }
        builder = builder.add_source(env.try_parsing(true));

        let config = builder.build().map_err(config_err)?;
        let raw: RawSettings = config.try_deserialize().map_err(config_err)?;
        raw.validate()
    }

    /// Load settings from a single file, ignoring the process environment.
    pub fn load_file(path: &Path) -> ApplicationResult<Self> {
        if !path.exists() {
            return Err(ApplicationError::Config {
                message: format!("config file not found: {}", path.display()),
            });
        }
        let empty_env = Environment::with_prefix(ENV_PREFIX).source(Some(Default::default()));
        Self::load_from(&[path.to_path_buf()], empty_env)
    }
}
