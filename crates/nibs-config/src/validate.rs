//! Checks behind `nibs check`: settings that load but will not behave as intended.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use globset::Glob;
use walkdir::WalkDir;

use crate::{Config, Library, ReaderSettings};

/// A problem that leaves the configuration usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No `[library.*]` table anywhere, so there is nothing to open.
    NoLibrariesDefined,
    /// A library folder was removed after the config was loaded.
    LibraryPathMissing {
        /// Library name.
        library: String,
        /// The missing folder.
        path: PathBuf,
    },
    /// A library path points at a file.
    LibraryPathNotDirectory {
        /// Library name.
        library: String,
        /// The file.
        path: PathBuf,
    },
    /// An include pattern selects no file in its library.
    IncludePatternMatchesNothing {
        /// Library name.
        library: String,
        /// The pattern.
        pattern: String,
    },
    /// `min_text_size` is above `max_text_size`; every size clamps to the minimum.
    TextSizeBoundsInverted {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
    /// The starting `text_size` lies outside the bounds and will be clamped.
    TextSizeOutOfBounds {
        /// Configured starting size.
        size: u32,
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },
    /// `text_size_step = 0` makes `text-size up` and `down` do nothing.
    TextSizeStepZero,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLibrariesDefined => f.write_str("no libraries are defined in configuration"),
            Self::LibraryPathMissing { library, path } => {
                write!(f, "library '{library}' path does not exist: {}", path.display())
            }
            Self::LibraryPathNotDirectory { library, path } => {
                write!(f, "library '{library}' path is not a directory: {}", path.display())
            }
            Self::IncludePatternMatchesNothing { library, pattern } => write!(
                f,
                "include pattern '{pattern}' for library '{library}' matches no files"
            ),
            Self::TextSizeBoundsInverted { min, max } => {
                write!(f, "min_text_size ({min}) is larger than max_text_size ({max})")
            }
            Self::TextSizeOutOfBounds { size, min, max } => write!(
                f,
                "text_size ({size}) is outside {min}..={max} and starts at the nearest bound"
            ),
            Self::TextSizeStepZero => f.write_str("text_size_step is 0, so steps change nothing"),
        }
    }
}

/// Runs every check. Reader settings are reported before libraries.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = reader_warnings(&config.reader);
    if config.libraries.is_empty() {
        warnings.push(ConfigWarning::NoLibrariesDefined);
    }
    warnings.extend(config.libraries.iter().flat_map(library_warnings));
    warnings
}

/// Text size settings that contradict each other.
fn reader_warnings(reader: &ReaderSettings) -> Vec<ConfigWarning> {
    let (min, max) = (reader.min_text_size, reader.max_text_size);
    let mut warnings = Vec::new();

    if min > max {
        warnings.push(ConfigWarning::TextSizeBoundsInverted { min, max });
    } else if !(min..=max).contains(&reader.text_size) {
        warnings.push(ConfigWarning::TextSizeOutOfBounds {
            size: reader.text_size,
            min,
            max,
        });
    }
    if reader.text_size_step == 0 {
        warnings.push(ConfigWarning::TextSizeStepZero);
    }

    warnings
}

/// A missing or non-folder path hides pattern problems, so only one is reported.
fn library_warnings(library: &Library) -> Vec<ConfigWarning> {
    let root = &library.path;
    if !root.exists() {
        return vec![ConfigWarning::LibraryPathMissing {
            library: library.name.clone(),
            path: root.clone(),
        }];
    }
    if !root.is_dir() {
        return vec![ConfigWarning::LibraryPathNotDirectory {
            library: library.name.clone(),
            path: root.clone(),
        }];
    }

    let files = files_below(root);
    library
        .include
        .iter()
        .filter(|pattern| !selects_any(pattern, &files))
        .map(|pattern| ConfigWarning::IncludePatternMatchesNothing {
            library: library.name.clone(),
            pattern: pattern.clone(),
        })
        .collect()
}

/// Every file under `root`, as a path relative to it.
fn files_below(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

/// Whether `pattern` matches at least one of `files`. Invalid globs match nothing.
fn selects_any(pattern: &str, files: &[PathBuf]) -> bool {
    Glob::new(pattern).is_ok_and(|glob| {
        let matcher = glob.compile_matcher();
        files.iter().any(|file| matcher.is_match(file))
    })
}
