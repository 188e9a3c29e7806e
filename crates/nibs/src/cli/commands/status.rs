//! Implementation of `nibs status`.

use std::process::ExitCode;

use nibs_config::{discover_config_files, display_library_path};
use nibs_highlight::Highlighter;

use crate::cli::{
    context::CommandContext,
    output::{dim, rule, subheader, warning},
};

/// Shows configuration files, libraries, patterns and effective settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("nibs init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        println!("   {}", path.display());
    }
    println!();

    let config = &ctx.config;

    println!("{}", subheader("Libraries:"));
    if config.libraries.is_empty() {
        println!("   {}", dim("(none defined)"));
    }
    for library in &config.libraries {
        let scope = if library.is_global { "global" } else { "local" };
        let missing = if library.path.is_dir() {
            String::new()
        } else {
            format!(" {}", warning("[missing]"))
        };
        println!(
            "   {} {} {}{missing}",
            library.name,
            dim(&format!("({scope})")),
            dim(&format!("-> {}", display_library_path(&library.path)))
        );
        for pattern in &library.include {
            println!("      + {pattern}");
        }
        for pattern in &library.exclude {
            println!("      - {pattern}");
        }
    }
    println!();

    let settings = match config.settings_to_toml() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", subheader("Effective settings:"));
    println!("{}", rule(40));
    print!("{}", Highlighter::new().highlight_toml(&settings));
    println!();
    println!("{}", rule(40));

    ExitCode::SUCCESS
}
