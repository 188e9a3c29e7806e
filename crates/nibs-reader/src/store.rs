//! Session state persistence.
//!
//! Reader state is stored as pretty JSON in `.nibs/state.json` under the directory containing
//! the most specific `.nibs.toml`, or in `~/.nibs/state.json` if only the global config exists.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use nibs_config::{CONFIG_FILENAME, Config};
use serde::{Deserialize, Serialize};

use crate::{Position, ReaderError, Snippet};

/// Directory name for nibs data (sibling to .nibs.toml).
const NIBS_DIR: &str = ".nibs";
/// State file within the data directory.
const STATE_FILE: &str = "state.json";

/// Everything a session keeps between invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// Library id of the loaded document.
    pub document_id: Option<String>,
    /// Displayed subsection.
    pub position: Option<Position>,
    /// Collected snippets, oldest first.
    pub snippets: Vec<Snippet>,
    /// Free-form notes.
    pub notes: String,
    /// Text size in pixels; `None` uses the configured default.
    pub text_size: Option<u32>,
    /// Whether text selections become snippets.
    pub highlight_mode: bool,
    /// Identifier for the next snippet.
    pub next_snippet_id: u64,
}

impl SessionState {
    /// Loads state from a JSON file.
    ///
    /// Returns the default state if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ReaderError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ReaderError::ReadState {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents).map_err(|source| ReaderError::ParseState {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves state to a JSON file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: &Path) -> Result<(), ReaderError> {
        let write_err = |source| ReaderError::WriteState {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(ReaderError::SerializeState)?;
        fs::write(path, contents).map_err(write_err)
    }
}

/// Computes the state file path based on configuration.
///
/// - If a `.nibs.toml` was found, state lives in `.nibs/state.json` next to the most
///   specific one (this is `~/.nibs/state.json` when only the global config exists)
/// - If no config exists, falls back to `~/.nibs/state.json`
pub fn state_path(config: &Config) -> Option<PathBuf> {
    match &config.config_root {
        Some(config_root) => {
            let root_dir = match config_root.file_name() {
                Some(name) if name == CONFIG_FILENAME => {
                    config_root.parent().unwrap_or(config_root.as_path())
                }
                _ => config_root.as_path(),
            };
            Some(root_dir.join(NIBS_DIR).join(STATE_FILE))
        }
        None => global_state_path(),
    }
}

/// Returns the global state file path (`~/.nibs/state.json`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_state_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(NIBS_DIR).join(STATE_FILE))
}
