//! User configuration
//!
//! Read once at startup from `<config dir>/tis/config.json`. A missing file means
//! defaults; a malformed one is an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::svn::constants::{DEFAULT_ENVIRONMENT, SVN_COMMAND};
use crate::svn::{EnvOverride, SessionConfig};

/// Directory name under the platform config and cache directories
pub const APP_DIR: &str = "tis";

const CONFIG_FILE: &str = "config.json";

/// Errors reading or writing configuration and state files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No {0} directory on this platform")]
    NoDirectory(&'static str),
}

/// Settings that shape the session and the initial listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Program launched for every svn command
    pub svn_command: String,
    /// `VAR=VALUE` sets, bare `VAR` unsets
    pub environment: Vec<String>,
    /// `svn status -v`: list unmodified files too
    pub verbose: bool,
    /// `svn status -u`: ask the repository for out-of-date items
    pub show_updates: bool,
    pub hide_unknown: bool,
    pub hide_unmodified: bool,
    pub full_paths: bool,
    pub sort_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            svn_command: SVN_COMMAND.to_string(),
            environment: DEFAULT_ENVIRONMENT.iter().map(|s| s.to_string()).collect(),
            verbose: true,
            show_updates: false,
            hide_unknown: false,
            hide_unmodified: true,
            full_paths: false,
            sort_enabled: true,
        }
    }
}

impl Config {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoDirectory("config"))?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path()?)
    }

    /// Load from `path`; defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        write_json(path, self)
    }

    /// Session settings for a working copy
    pub fn session_config(&self, working_dir: impl Into<PathBuf>) -> SessionConfig {
        SessionConfig {
            program: self.svn_command.clone(),
            working_dir: working_dir.into(),
            environment: self
                .environment
                .iter()
                .map(|spec| EnvOverride::parse(spec))
                .collect(),
        }
    }
}

/// Pretty-print `value` to `path`, creating parent directories
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let json = serde_json::to_string_pretty(value).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(io_error)
}
