//! Configuration system for nibs.
//!
//! nibs uses TOML configuration files named `.nibs.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.nibs.toml` files
//! found, then loading `~/.nibs.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{DEFAULT_INCLUDE_PATTERNS, ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawLibrary, RawReaderSettings, RawSearchSettings, parse_config_file,
    parse_config_str,
};
pub use patterns::CompiledPatterns;
pub use resolve::{display_library_path, resolve_library_path};
use nibs_index::{DEFAULT_CONTEXT_RADIUS, DEFAULT_MIN_TOKEN_LENGTH};
use serde::{Deserialize, Serialize};
pub use templates::ConfigTemplate;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default starting text size in pixels.
pub const DEFAULT_TEXT_SIZE: u32 = 16;
/// Default smallest text size in pixels.
pub const DEFAULT_MIN_TEXT_SIZE: u32 = 12;
/// Default largest text size in pixels.
pub const DEFAULT_MAX_TEXT_SIZE: u32 = 24;
/// Default text size adjustment step in pixels.
pub const DEFAULT_TEXT_SIZE_STEP: u32 = 2;

/// Top-level merged configuration for nibs.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.nibs.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Reader presentation settings.
    pub reader: ReaderSettings,
    /// Search index settings.
    pub search: SearchSettings,
    /// Resolved libraries with their absolute paths and patterns.
    pub libraries: Vec<Library>,
    /// Directory containing the most specific config file (determines state location).
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.nibs.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Compiles the include/exclude patterns for every library.
    pub fn compile_patterns(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.libraries)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - Library paths that don't exist or aren't directories
    /// - Include patterns that don't match any files
    /// - Inverted text size bounds
    /// - Empty configuration (no libraries defined)
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Libraries are omitted since they carry resolved paths.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            reader: self.reader.clone(),
            search: self.search.clone(),
        };
        toml::to_string_pretty(&serializable).map_err(ConfigError::SerializeToml)
    }
}

/// Text presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReaderSettings {
    /// Text size a fresh session starts with.
    pub text_size: u32,
    /// Lower clamp for text size adjustments.
    pub min_text_size: u32,
    /// Upper clamp for text size adjustments.
    pub max_text_size: u32,
    /// Step used by `+` / `-` adjustments.
    pub text_size_step: u32,
    /// Document opened when the session has none loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_document: Option<String>,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            text_size: DEFAULT_TEXT_SIZE,
            min_text_size: DEFAULT_MIN_TEXT_SIZE,
            max_text_size: DEFAULT_MAX_TEXT_SIZE,
            text_size_step: DEFAULT_TEXT_SIZE_STEP,
            default_document: None,
        }
    }
}

/// Search index settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Tokens shorter than this are not indexed.
    pub min_token_length: usize,
    /// Characters of context kept on each side of a match.
    pub context_radius: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            min_token_length: DEFAULT_MIN_TOKEN_LENGTH,
            context_radius: DEFAULT_CONTEXT_RADIUS,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Reader settings.
    reader: ReaderSettings,
    /// Search settings.
    search: SearchSettings,
}

/// A named library pointing to a directory of document files.
#[derive(Debug, Clone)]
pub struct Library {
    /// Name of the library.
    pub name: String,
    /// Resolved absolute path to the library directory.
    pub path: PathBuf,
    /// Whether this library was defined in the global `~/.nibs.toml`.
    pub is_global: bool,
    /// Include patterns for document files (defaults to ["**/*.toml", "**/*.json"]).
    pub include: Vec<String>,
    /// Exclude patterns for files to skip (defaults to empty).
    pub exclude: Vec<String>,
}
