//! Include/exclude pattern compilation and matching.
//!
//! Compiles glob patterns from library configuration into matchers used when
//! discovering document files.

use std::{collections::HashMap, path::Path};

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::{ConfigError, Library};

/// Compiled glob patterns, organized per library.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Compiled include patterns per library name.
    include_patterns: HashMap<String, GlobSet>,
    /// Compiled exclude patterns per library name.
    exclude_patterns: HashMap<String, GlobSet>,
}

impl CompiledPatterns {
    /// Compiles include/exclude patterns from libraries.
    pub fn compile(libraries: &[Library]) -> Result<Self, ConfigError> {
        let mut include_patterns = HashMap::new();
        let mut exclude_patterns = HashMap::new();

        for library in libraries {
            include_patterns.insert(
                library.name.clone(),
                build_set(&library.include, &library.name, "include")?,
            );
            exclude_patterns.insert(
                library.name.clone(),
                build_set(&library.exclude, &library.name, "exclude")?,
            );
        }

        Ok(Self {
            include_patterns,
            exclude_patterns,
        })
    }

    /// Checks if a path matches the patterns for a given library.
    ///
    /// A file matches if it matches at least one include pattern and no exclude pattern.
    /// The path should be relative to the library root. Unknown libraries match nothing.
    pub fn matches(&self, library: &str, path: &Path) -> bool {
        let included = self
            .include_patterns
            .get(library)
            .is_some_and(|p| p.is_match(path));
        let excluded = self
            .exclude_patterns
            .get(library)
            .is_some_and(|p| p.is_match(path));

        included && !excluded
    }
}

/// Builds one glob set from a list of patterns.
fn build_set(patterns: &[String], library: &str, kind: &str) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(compile_glob(pattern, library)?);
    }
    builder.build().map_err(|e| ConfigError::InvalidPattern {
        library: library.to_string(),
        pattern: format!("<all {kind} patterns>"),
        source: e,
    })
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str, library: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        library: library.to_string(),
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn library(name: &str, include: &[&str], exclude: &[&str]) -> Library {
        Library {
            name: name.into(),
            path: PathBuf::from("/tmp"),
            is_global: false,
            include: include.iter().map(|s| (*s).to_string()).collect(),
            exclude: exclude.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_include_and_exclude() {
        let patterns = CompiledPatterns::compile(&[library(
            "course",
            &["**/*.toml"],
            &["drafts/**"],
        )])
        .unwrap();

        assert!(patterns.matches("course", Path::new("physics/pressure.toml")));
        assert!(!patterns.matches("course", Path::new("drafts/pressure.toml")));
        assert!(!patterns.matches("course", Path::new("physics/pressure.json")));
    }

    #[test]
    fn test_unknown_library_matches_nothing() {
        let patterns = CompiledPatterns::compile(&[library("course", &["**/*"], &[])]).unwrap();
        assert!(!patterns.matches("other", Path::new("a.toml")));
    }

    #[test]
    fn test_invalid_pattern_errors() {
        let err = CompiledPatterns::compile(&[library("course", &["[unclosed"], &[])]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidPattern { ref library, ref pattern, .. }
                if library == "course" && pattern == "[unclosed"
        ));
    }
}
