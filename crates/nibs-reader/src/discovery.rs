//! Document file discovery.
//!
//! Walks configured libraries to find document files, applying include/exclude patterns
//! and skipping hidden entries and symlinks.

use std::{ffi::OsStr, path::PathBuf};

use nibs_config::{CompiledPatterns, Library};
use walkdir::WalkDir;

/// A document file discovered in a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Library name this file belongs to.
    pub library: String,
    /// Absolute path to the file.
    pub abs_path: PathBuf,
    /// Relative path within the library.
    pub rel_path: PathBuf,
}

/// Discovers all document files in the given libraries.
///
/// For each library, walks the directory and returns files that:
/// - Match at least one include pattern
/// - Don't match any exclude pattern
/// - Are regular files (not directories or symlinks)
/// - Are not hidden and not inside a hidden directory
///
/// Files are returned sorted by path within each library, libraries in the order given.
pub fn discover_files(libraries: &[Library], patterns: &CompiledPatterns) -> Vec<DiscoveredFile> {
    let mut files = Vec::new();

    for library in libraries {
        if !library.path.exists() {
            continue;
        }

        let walker = WalkDir::new(&library.path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

        for entry in walker.filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }

            let abs_path = entry.path().to_path_buf();
            let Ok(rel_path) = abs_path.strip_prefix(&library.path) else {
                continue;
            };
            let rel_path = rel_path.to_path_buf();

            if !patterns.matches(&library.name, &rel_path) {
                continue;
            }

            files.push(DiscoveredFile {
                library: library.name.clone(),
                abs_path,
                rel_path,
            });
        }
    }

    files
}

/// Checks if a filename represents a hidden file (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::TempDir;

    use super::*;

    fn library(name: &str, path: &Path, exclude: &[&str]) -> Library {
        Library {
            name: name.into(),
            path: path.to_path_buf(),
            is_global: false,
            include: vec!["**/*.toml".into(), "**/*.json".into()],
            exclude: exclude.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn rel_paths(files: &[DiscoveredFile]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.rel_path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_discovers_matching_files_sorted() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "physics/pressure.toml");
        touch(tmp.path(), "accessibility.json");
        touch(tmp.path(), "readme.md");

        let libs = vec![library("course", tmp.path(), &[])];
        let patterns = CompiledPatterns::compile(&libs).unwrap();
        let files = discover_files(&libs, &patterns);

        assert_eq!(
            rel_paths(&files),
            vec!["accessibility.json", "physics/pressure.toml"]
        );
        assert!(files.iter().all(|f| f.library == "course"));
        assert!(files.iter().all(|f| f.abs_path.is_absolute()));
    }

    #[test]
    fn test_skips_hidden_and_excluded() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), ".hidden.toml");
        touch(tmp.path(), ".nibs/state.json");
        touch(tmp.path(), "drafts/wip.toml");
        touch(tmp.path(), "final.toml");

        let libs = vec![library("course", tmp.path(), &["drafts/**"])];
        let patterns = CompiledPatterns::compile(&libs).unwrap();

        assert_eq!(rel_paths(&discover_files(&libs, &patterns)), vec!["final.toml"]);
    }

    #[test]
    fn test_missing_library_path_is_skipped() {
        let libs = vec![library("gone", Path::new("/nonexistent/nibs/library"), &[])];
        let patterns = CompiledPatterns::compile(&libs).unwrap();
        assert!(discover_files(&libs, &patterns).is_empty());
    }
}
