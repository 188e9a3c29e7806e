//! Implementation of `nibs check`.

use std::process::ExitCode;

use nibs_config::{ConfigWarning, discover_config_files};

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Validates configuration and library contents, printing warnings with hints.
///
/// Exits with failure when any warning is found.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    if discover_config_files(&ctx.cwd).is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("nibs init")
        );
        return ExitCode::SUCCESS;
    }

    let warnings = ctx.config.validate();

    let documents = match ctx.library() {
        Ok(library) => library.len(),
        Err(code) => return code,
    };
    println!("{}", subheader("Documents:"));
    println!("   {documents} loaded");
    println!();

    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", warning(&w.to_string()));
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::NoLibrariesDefined => "Hint: add [library.NAME] sections to .nibs.toml",
            ConfigWarning::LibraryPathMissing { .. } => {
                "Hint: create the missing directory or update the library path"
            }
            ConfigWarning::LibraryPathNotDirectory { .. } => {
                "Hint: library paths must point to directories, not files"
            }
            ConfigWarning::IncludePatternMatchesNothing { .. } => {
                "Hint: check include patterns or library paths"
            }
            ConfigWarning::TextSizeBoundsInverted { .. } => {
                "Hint: set min_text_size below max_text_size in [reader]"
            }
            ConfigWarning::TextSizeOutOfBounds { .. } => {
                "Hint: set text_size between min_text_size and max_text_size in [reader]"
            }
            ConfigWarning::TextSizeStepZero => "Hint: set text_size_step to a positive number",
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    for hint in hints {
        println!("{}", dim(hint));
    }
}
