//! Library folder paths: `~` expansion on the way in, `~` contraction on the way out.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Turns a `path = "..."` value from a library table into a canonical folder path.
///
/// `~` and `~/...` name the home directory; other relative values are taken from
/// `config_dir`, the folder holding the `.nibs.toml` that defined the library.
/// The folder must exist.
pub fn resolve_library_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let joined = match home_relative(path) {
        Some(rest) => home_dir()?.join(rest),
        None => config_dir.join(path),
    };

    let folder = joined
        .canonicalize()
        .map_err(|source| ConfigError::PathResolution {
            path: joined,
            source,
        })?;

    if folder.is_dir() {
        Ok(folder)
    } else {
        Err(ConfigError::LibraryPathNotDirectory { path: folder })
    }
}

/// Renders a path for display, writing the home directory as `~`.
pub fn display_library_path(path: &Path) -> String {
    let below_home = home_dir()
        .ok()
        .and_then(|home| path.strip_prefix(home).ok().map(Path::to_path_buf));
    match below_home {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

/// The part of `path` below the home directory, when it is written with a leading `~`.
fn home_relative(path: &str) -> Option<&str> {
    if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    }
}

/// The current user's home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Shelf;

    fn home() -> PathBuf {
        BaseDirs::new().unwrap().home_dir().to_path_buf()
    }

    #[test]
    fn dot_relative_folder_is_taken_from_the_config_dir() {
        let shelf = Shelf::new();
        let texts = shelf.folder("texts");

        let resolved = resolve_library_path("./texts", shelf.root()).unwrap();
        assert_eq!(resolved, texts.canonicalize().unwrap());
    }

    #[test]
    fn bare_and_parent_relative_folders() {
        let shelf = Shelf::new();
        let shared = shelf.folder("shared/physics");
        let course = shelf.folder("course");

        assert_eq!(
            resolve_library_path("../shared/physics", &course).unwrap(),
            shared.canonicalize().unwrap()
        );
        assert_eq!(
            resolve_library_path("shared/physics", shelf.root()).unwrap(),
            shared.canonicalize().unwrap()
        );
    }

    #[test]
    fn absolute_folder_ignores_the_config_dir() {
        let shelf = Shelf::new();
        let texts = shelf.folder("texts").canonicalize().unwrap();

        let resolved =
            resolve_library_path(texts.to_str().unwrap(), Path::new("/elsewhere")).unwrap();
        assert_eq!(resolved, texts);
    }

    #[test]
    fn missing_folder_reports_the_joined_path() {
        let shelf = Shelf::new();
        let err = resolve_library_path("./gone", shelf.root()).unwrap_err();
        let ConfigError::PathResolution { path, .. } = err else {
            panic!("expected PathResolution, got {err:?}");
        };
        assert_eq!(path, shelf.root().join("./gone"));
    }

    #[test]
    fn document_file_is_not_a_library() {
        let shelf = Shelf::new();
        shelf.document("barometers.toml", "title = \"Barometers\"\n");

        let err = resolve_library_path("./barometers.toml", shelf.root()).unwrap_err();
        assert!(matches!(err, ConfigError::LibraryPathNotDirectory { .. }));
    }

    #[test]
    fn tilde_forms() {
        assert_eq!(home_relative("~"), Some(""));
        assert_eq!(home_relative("~/texts/physics"), Some("texts/physics"));
        assert_eq!(home_relative("texts/~/physics"), None);
        assert_eq!(home_relative("~texts"), None);
    }

    #[test]
    fn home_folder_displays_with_tilde() {
        assert_eq!(display_library_path(&home()), "~");
        assert_eq!(display_library_path(&home().join("texts")), "~/texts");
        assert_eq!(display_library_path(Path::new("/srv/texts")), "/srv/texts");
    }
}
