//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use log::debug;
use nibs_config::Config;
use nibs_reader::{
    Announcer, ContentLibrary, LogAnnouncer, ReaderSession, RecordingAnnouncer, SessionState,
    state_path,
};

use crate::cli::output::{print_notices, warning};

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Content library, discovered on first use.
    library: Option<ContentLibrary>,
    /// Route reader notices to the log instead of stdout.
    pub quiet: bool,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            library: None,
            quiet: false,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            library: None,
            quiet: false,
        })
    }

    /// Ensures at least one library is configured, optionally printing an init hint.
    pub fn require_libraries(&self, show_init_hint: bool) -> Result<(), ExitCode> {
        if self.config.libraries.is_empty() {
            eprintln!("error: no libraries defined in configuration");
            if show_init_hint {
                eprintln!(
                    "Run 'nibs init' to create a configuration file, then add library definitions."
                );
            }
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Returns the content library, discovering it on first use.
    ///
    /// Files that could not be registered are reported on stderr.
    pub fn library(&mut self) -> Result<&ContentLibrary, ExitCode> {
        let library = match self.library.take() {
            Some(library) => library,
            None => discover_library(&self.config)?,
        };
        Ok(self.library.insert(library))
    }

    /// Opens the persisted reading session.
    pub fn session(&mut self) -> Result<Session, ExitCode> {
        let Some(path) = state_path(&self.config) else {
            eprintln!("error: could not determine where to store reader state");
            return Err(ExitCode::FAILURE);
        };

        debug!("reader state: {}", path.display());
        let state = SessionState::load(&path).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;

        let mut reader = ReaderSession::from_config(&self.config, RecordingAnnouncer::new());
        reader.restore(state, self.library()?);

        Ok(Session {
            reader,
            path,
            quiet: self.quiet,
        })
    }
}

/// A reading session bound to its state file.
pub struct Session {
    /// The session; notices are recorded and printed by [`Session::flush`].
    pub reader: ReaderSession<RecordingAnnouncer>,
    /// State file location.
    path: PathBuf,
    /// Forward notices to the log instead of printing them.
    quiet: bool,
}

impl Session {
    /// Delivers the notices recorded since the last flush.
    pub fn flush(&mut self) {
        let notices = self.reader.announcer_mut().take();
        if self.quiet {
            let mut log = LogAnnouncer;
            for notice in notices {
                log.announce(notice);
            }
        } else {
            print_notices(&notices);
        }
    }

    /// Prints pending notices and persists the session state.
    pub fn save(mut self) -> ExitCode {
        self.flush();
        match self.reader.state().save(&self.path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        }
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}

/// Discovers library documents, reporting skipped files.
fn discover_library(config: &Config) -> Result<ContentLibrary, ExitCode> {
    let (library, warnings) = ContentLibrary::discover(config).map_err(|e| {
        eprintln!("error: failed to load libraries: {e}");
        ExitCode::FAILURE
    })?;

    for skipped in &warnings {
        eprintln!(
            "{} {}: {}",
            warning("skipped"),
            skipped.path.display(),
            skipped.reason
        );
    }

    Ok(library)
}
