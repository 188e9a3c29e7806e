//! Starter `.nibs.toml` contents written by `nibs init`.
//!
//! The sources under `templates/` are real configs so they stay parseable; they are
//! written out with every setting commented, leaving the prose comments alone.

/// Which starter config to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigTemplate {
    /// `.nibs.toml` for a reading folder.
    Local,
    /// `~/.nibs.toml`.
    Global,
}

impl ConfigTemplate {
    /// Picks the global template when writing to the home directory.
    pub fn for_target(global: bool) -> Self {
        if global { Self::Global } else { Self::Local }
    }

    /// The uncommented template source.
    fn source(self) -> &'static str {
        match self {
            Self::Local => include_str!("../templates/config.toml"),
            Self::Global => include_str!("../templates/config-global.toml"),
        }
    }

    /// Template text with all settings commented out.
    pub fn render(self) -> String {
        self.source().lines().map(commented).collect()
    }
}

/// Comments out one template line. Blank lines and existing comments pass through.
fn commented(line: &str) -> String {
    if line.is_empty() || line.starts_with('#') {
        format!("{line}\n")
    } else {
        format!("# {line}\n")
    }
}
