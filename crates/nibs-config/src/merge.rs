//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    Config, ConfigError, Library, ReaderSettings, SearchSettings,
    discovery::is_global_config,
    parse::{RawConfig, RawLibrary, RawReaderSettings, RawSearchSettings},
    resolve::resolve_library_path,
};

/// Default include patterns when none are specified.
pub const DEFAULT_INCLUDE_PATTERNS: &[&str] = &["**/*.toml", "**/*.json"];

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory holding the config file.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Libraries: merged by name, first definition wins completely
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let reader = merge_reader_settings(configs);
    let search = merge_search_settings(configs);
    let libraries = merge_libraries(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        reader,
        search,
        libraries,
        config_root,
    })
}

/// Merges reader settings, taking first defined value for each field.
fn merge_reader_settings(configs: &[ParsedConfig]) -> ReaderSettings {
    let mut result = ReaderSettings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref reader) = parsed.config.reader {
            apply_raw_reader(&mut result, reader);
        }
    }

    result
}

/// Applies raw reader settings to result, overwriting any present values.
fn apply_raw_reader(result: &mut ReaderSettings, raw: &RawReaderSettings) {
    if let Some(v) = raw.text_size {
        result.text_size = v;
    }
    if let Some(v) = raw.min_text_size {
        result.min_text_size = v;
    }
    if let Some(v) = raw.max_text_size {
        result.max_text_size = v;
    }
    if let Some(v) = raw.text_size_step {
        result.text_size_step = v;
    }
    if let Some(ref v) = raw.default_document {
        result.default_document = Some(v.clone());
    }
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.min_token_length {
        result.min_token_length = v;
    }
    if let Some(v) = raw.context_radius {
        result.context_radius = v;
    }
}

/// Merges libraries from all configs, resolving paths.
///
/// Libraries are merged by name - first definition wins.
/// `is_global` is determined by whether the source config file is `~/.nibs.toml`.
fn merge_libraries(configs: &[ParsedConfig]) -> Result<Vec<Library>, ConfigError> {
    let mut seen: HashMap<String, Library> = HashMap::new();

    for parsed in configs {
        let Some(ref libraries) = parsed.config.library else {
            continue;
        };

        let config_dir = parsed.dir();
        let is_global = is_global_config(&parsed.path);

        for (name, raw) in libraries {
            if seen.contains_key(name) {
                continue;
            }

            let resolved_path = resolve_library_path(&raw.path, config_dir)?;
            seen.insert(
                name.clone(),
                convert_library(name, raw, resolved_path, is_global),
            );
        }
    }

    let mut libraries: Vec<Library> = seen.into_values().collect();
    libraries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(libraries)
}

/// Converts a raw library to the final type with defaults applied.
fn convert_library(name: &str, raw: &RawLibrary, path: PathBuf, is_global: bool) -> Library {
    let include = raw.include.clone().unwrap_or_else(|| {
        DEFAULT_INCLUDE_PATTERNS
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    });

    Library {
        name: name.to_string(),
        path,
        is_global,
        include,
        exclude: raw.exclude.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse::parse_config_str, test_support::Shelf};

    fn parsed(dir: &Path, contents: &str) -> ParsedConfig {
        ParsedConfig {
            path: dir.join(".nibs.toml"),
            config: parse_config_str(contents, Path::new("test")).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty_configs() {
        let result = merge_configs(&[]).unwrap();
        assert_eq!(result.reader.text_size, 16);
        assert!(result.libraries.is_empty());
    }

    #[test]
    fn test_merge_single_config() {
        let shelf = Shelf::new();
        shelf.folder("texts");

        let config = parsed(
            shelf.root(),
            r#"
[reader]
text_size = 20

[library.course]
path = "./texts"
"#,
        );

        let result = merge_configs(&[config]).unwrap();
        assert_eq!(result.reader.text_size, 20);
        assert_eq!(result.reader.max_text_size, 24);
        assert_eq!(result.libraries.len(), 1);
        assert_eq!(result.libraries[0].name, "course");
        assert_eq!(result.libraries[0].include, vec!["**/*.toml", "**/*.json"]);
        assert!(result.libraries[0].exclude.is_empty());
        assert_eq!(result.config_root.as_deref(), Some(shelf.root()));
    }

    #[test]
    fn test_merge_precedence_first_wins() {
        let shelf = Shelf::new();
        let inner = shelf.folder("inner");

        let high = parsed(&inner, "[search]\ncontext_radius = 20\n");
        let low = parsed(
            shelf.root(),
            "[search]\ncontext_radius = 80\nmin_token_length = 4\n",
        );

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.search.context_radius, 20);
        assert_eq!(result.search.min_token_length, 4);
        assert_eq!(result.config_root.as_deref(), Some(inner.as_path()));
    }

    #[test]
    fn test_merge_library_first_definition_wins() {
        let shelf = Shelf::new();
        let near = shelf.folder("project/near");
        shelf.folder("far");
        let project = shelf.root().join("project");

        let high = parsed(&project, "[library.shared]\npath = \"./near\"\n");
        let low = parsed(shelf.root(), "[library.shared]\npath = \"./far\"\n");

        let result = merge_configs(&[high, low]).unwrap();
        assert_eq!(result.libraries.len(), 1);
        assert_eq!(result.libraries[0].path, near.canonicalize().unwrap());
    }

    #[test]
    fn test_merge_libraries_sorted_by_name() {
        let shelf = Shelf::new();
        shelf.folder("a");
        shelf.folder("b");

        let config = parsed(
            shelf.root(),
            "[library.zeta]\npath = \"./a\"\n\n[library.alpha]\npath = \"./b\"\n",
        );

        let result = merge_configs(&[config]).unwrap();
        let names: Vec<_> = result.libraries.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_merge_missing_library_path_fails() {
        let shelf = Shelf::new();
        let config = parsed(shelf.root(), "[library.gone]\npath = \"./missing\"\n");

        let err = merge_configs(&[config]).unwrap_err();
        assert!(matches!(err, ConfigError::PathResolution { .. }));
    }
}
