//! Configuration file parsing.
//!
//! Parses individual `.nibs.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Reader settings section.
    pub reader: Option<RawReaderSettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Library definitions: name -> library config.
    pub library: Option<BTreeMap<String, RawLibrary>>,
}

/// Raw library definition from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawLibrary {
    /// Path to the library directory.
    pub path: String,
    /// Include patterns. Accepts a single string or an array.
    #[serde(default)]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub include: Option<Vec<String>>,
    /// Exclude patterns. Accepts a single string or an array.
    #[serde(default)]
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Raw reader settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawReaderSettings {
    /// Starting text size.
    pub text_size: Option<u32>,
    /// Lower clamp for text size.
    pub min_text_size: Option<u32>,
    /// Upper clamp for text size.
    pub max_text_size: Option<u32>,
    /// Adjustment step.
    pub text_size_step: Option<u32>,
    /// Document opened when none is loaded.
    pub default_document: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Minimum indexed token length.
    pub min_token_length: Option<usize>,
    /// Context radius around a match.
    pub context_radius: Option<usize>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns true if the config file at `path` sets `root = true`.
///
/// Unreadable or malformed files are treated as non-root; the error surfaces later when
/// the file is parsed for real.
pub(crate) fn is_root_config(path: &Path) -> bool {
    parse_config_file(path)
        .ok()
        .and_then(|config| config.root)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> RawConfig {
        parse_config_str(contents, Path::new("test.toml")).unwrap()
    }

    #[test]
    fn test_parse_empty() {
        let config = parse("");
        assert!(config.root.is_none());
        assert!(config.reader.is_none());
        assert!(config.library.is_none());
    }

    #[test]
    fn test_parse_reader_settings() {
        let config = parse(
            r#"
[reader]
text_size = 18
default_document = "nibs-paper"
"#,
        );
        let reader = config.reader.unwrap();
        assert_eq!(reader.text_size, Some(18));
        assert_eq!(reader.default_document.as_deref(), Some("nibs-paper"));
        assert!(reader.min_text_size.is_none());
    }

    #[test]
    fn test_parse_library_single_include() {
        let config = parse(
            r#"
[library.course]
path = "./texts"
include = "**/*.toml"
"#,
        );
        let libraries = config.library.unwrap();
        let course = &libraries["course"];
        assert_eq!(course.path, "./texts");
        assert_eq!(course.include.as_deref(), Some(&["**/*.toml".to_string()][..]));
        assert!(course.exclude.is_none());
    }

    #[test]
    fn test_parse_library_many_patterns() {
        let config = parse(
            r#"
[library.course]
path = "./texts"
include = ["**/*.toml", "**/*.json"]
exclude = ["drafts/**"]
"#,
        );
        let course = &config.library.unwrap()["course"];
        assert_eq!(course.include.as_ref().unwrap().len(), 2);
        assert_eq!(course.exclude.as_ref().unwrap(), &vec!["drafts/**".to_string()]);
    }

    #[test]
    fn test_parse_error_reports_path() {
        let err = parse_config_str("[reader\n", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_root_flag() {
        let config = parse("root = true\n");
        assert_eq!(config.root, Some(true));
    }
}
