//! Implementation of `nibs init`.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::Path,
    process::ExitCode,
};

use nibs_config::{CONFIG_FILENAME, ConfigTemplate, global_config_path};
use nibs_highlight::{Highlighter, subheader};

use crate::cli::{args::InitCommand, context::CommandContext};

/// `.gitignore` entry for the reader state directory.
const STATE_DIR_ENTRY: &str = ".nibs/";

/// Writes a starter `.nibs.toml`, or `~/.nibs.toml` with `--global` or from the home directory.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let home_config = global_config_path();
    let in_home = home_config
        .as_deref()
        .and_then(Path::parent)
        .is_some_and(|home| home == ctx.cwd);
    let global = cmd.global || in_home;

    let target = match (global, home_config) {
        (false, _) => ctx.cwd.join(CONFIG_FILENAME),
        (true, Some(path)) => path,
        (true, None) => {
            eprintln!("error: could not determine home directory");
            return ExitCode::FAILURE;
        }
    };

    if target.exists() && !cmd.force {
        eprintln!("error: configuration file already exists: {}", target.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = ConfigTemplate::for_target(global).render();
    if let Err(e) = fs::write(&target, &template) {
        eprintln!("error: failed to write {}: {e}", target.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", target.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    print!("{}", Highlighter::new().highlight_toml(&template));
    println!();

    if !global {
        match ignore_state_dir(&ctx.cwd) {
            Ok(true) => println!("Added {STATE_DIR_ENTRY} to .gitignore"),
            Ok(false) => {}
            Err(e) => eprintln!("warning: could not update .gitignore: {e}"),
        }
    }

    ExitCode::SUCCESS
}

/// Appends the state directory to an existing `.gitignore` in `dir`.
///
/// Returns whether the file changed. A missing `.gitignore` is left missing.
fn ignore_state_dir(dir: &Path) -> io::Result<bool> {
    let path = dir.join(".gitignore");
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    let listed = contents
        .lines()
        .map(str::trim)
        .any(|entry| entry.trim_end_matches('/') == STATE_DIR_ENTRY.trim_end_matches('/'));
    if listed {
        return Ok(false);
    }

    let separator = if contents.is_empty() || contents.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    let mut file = OpenOptions::new().append(true).open(&path)?;
    write!(file, "{separator}{STATE_DIR_ENTRY}\n")?;
    Ok(true)
}
