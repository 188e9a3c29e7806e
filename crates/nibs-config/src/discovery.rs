//! Configuration file discovery.
//!
//! Discovers `.nibs.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.nibs.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".nibs.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.nibs.toml`) last.
///
/// The walk stops early at a config file that sets `root = true`; in that case the global
/// config is not appended either.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();
    let mut found_root = false;

    let mut current = Some(cwd);
    while let Some(dir) = current {
        let config_path = dir.join(CONFIG_FILENAME);
        if config_path.is_file() {
            let is_root = is_root_config(&config_path);
            configs.push(config_path);
            if is_root {
                found_root = true;
                break;
            }
        }
        current = dir.parent();
    }

    if !found_root
        && let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    configs
}

/// Returns the path to the global configuration file (`~/.nibs.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::Shelf;

    /// Drops the user's global config so results only reflect the scratch tree.
    fn without_global(configs: Vec<PathBuf>) -> Vec<PathBuf> {
        configs
            .into_iter()
            .filter(|p| !is_global_config(p))
            .collect()
    }

    #[test]
    fn finds_nothing_in_an_unconfigured_tree() {
        let shelf = Shelf::new();
        let chapter = shelf.folder("physics/mechanics/chapter-2");

        assert!(without_global(discover_config_files(&chapter)).is_empty());
    }

    #[test]
    fn nearest_config_comes_first() {
        let shelf = Shelf::new();
        let top = shelf.config("", "[reader]\ntext_size = 18\n");
        let course = shelf.config("physics", "[search]\ncontext_radius = 30\n");
        let unit = shelf.config("physics/mechanics", "");
        let chapter = shelf.folder("physics/mechanics/chapter-2");

        let found = without_global(discover_config_files(&chapter));
        assert_eq!(found, vec![unit, course, top]);
    }

    #[test]
    fn config_in_the_start_directory_is_included() {
        let shelf = Shelf::new();
        let here = shelf.config("physics", "");

        let found = without_global(discover_config_files(&shelf.root().join("physics")));
        assert_eq!(found, vec![here]);
    }

    #[test]
    fn a_directory_named_like_the_config_is_ignored() {
        let shelf = Shelf::new();
        shelf.folder(CONFIG_FILENAME);
        let notes = shelf.folder("notes");

        assert!(without_global(discover_config_files(&notes)).is_empty());
    }

    #[test]
    fn root_marker_hides_parents_and_global() {
        let shelf = Shelf::new();
        shelf.config("", "[reader]\ntext_size = 30\n");
        let course = shelf.root_config("physics");
        let chapter = shelf.folder("physics/chapter-1");

        assert_eq!(discover_config_files(&chapter), vec![course]);
    }

    #[test]
    fn explicit_root_false_keeps_walking() {
        let shelf = Shelf::new();
        let top = shelf.config("", "");
        let course = shelf.config("physics", "root = false\n");

        let found = without_global(discover_config_files(&shelf.root().join("physics")));
        assert_eq!(found, vec![course, top]);
    }

    #[test]
    fn unreadable_root_setting_is_not_a_root() {
        let shelf = Shelf::new();
        let top = shelf.config("", "");
        let broken = shelf.config("physics", "root = [not toml\n");

        let found = without_global(discover_config_files(&shelf.root().join("physics")));
        assert_eq!(found, vec![broken, top]);
    }

    #[test]
    fn global_path_lives_in_home() {
        let global = global_config_path().unwrap();
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        assert_eq!(global, home.join(CONFIG_FILENAME));
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/srv/texts/.nibs.toml")));
    }

    #[test]
    fn stale_config_file_removed_between_walks() {
        let shelf = Shelf::new();
        let course = shelf.config("physics", "");
        let start = shelf.root().join("physics");
        assert_eq!(without_global(discover_config_files(&start)), vec![course.clone()]);

        fs::remove_file(&course).unwrap();
        assert!(without_global(discover_config_files(&start)).is_empty());
    }
}
