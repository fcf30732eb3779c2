//! Per working-copy state that outlives a session
//!
//! One JSON file in the user cache directory maps each working-copy root to the
//! settings the user left it with.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{APP_DIR, ConfigError, write_json};
use crate::model::{Elide, UiState};

const STATE_FILE: &str = "state.json";

/// Saved state of one working copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkingCopyState {
    pub sort_enabled: bool,
    /// Elided paths, restored into the first listing
    pub elide_list: Vec<(String, Elide)>,
    /// Repository path of the working copy, from `svn info`
    pub module_name: Option<String>,
    /// URLs this working copy has been seen at, most recent last
    pub branch_list: Vec<String>,
}

impl Default for WorkingCopyState {
    fn default() -> Self {
        Self {
            sort_enabled: true,
            elide_list: Vec::new(),
            module_name: None,
            branch_list: Vec::new(),
        }
    }
}

impl WorkingCopyState {
    /// UI state seeds for [`crate::model::EntryModel::seed_ui_state`]
    pub fn ui_seeds(&self) -> impl Iterator<Item = (String, UiState)> + '_ {
        self.elide_list.iter().map(|(path, elide)| {
            (
                path.clone(),
                UiState {
                    elide: *elide,
                    ..UiState::default()
                },
            )
        })
    }

    /// Remember `url`, moving it to the end if already known
    pub fn record_branch(&mut self, url: &str) {
        self.branch_list.retain(|known| known != url);
        self.branch_list.push(url.to_string());
    }
}

/// All saved working-copy states
#[derive(Debug)]
pub struct StateStore {
    path: PathBuf,
    states: BTreeMap<String, WorkingCopyState>,
}

impl StateStore {
    /// Default location of the state file
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::cache_dir().ok_or(ConfigError::NoDirectory("cache"))?;
        Ok(dir.join(APP_DIR).join(STATE_FILE))
    }

    /// Open the store at `path`; empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let states = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                    path: path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(ConfigError::Io { path, source }),
        };
        Ok(Self { path, states })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved state for a working-copy root
    pub fn get(&self, root: &Path) -> Option<&WorkingCopyState> {
        self.states.get(&Self::key(root))
    }

    pub fn set(&mut self, root: &Path, state: WorkingCopyState) {
        self.states.insert(Self::key(root), state);
    }

    /// Write every state back to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        log::debug!(
            "saving {} working-copy states to {}",
            self.states.len(),
            self.path.display()
        );
        write_json(&self.path, &self.states)
    }

    fn key(root: &Path) -> String {
        root.to_string_lossy().into_owned()
    }
}
