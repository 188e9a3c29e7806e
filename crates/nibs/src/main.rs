//! Command-line interface for the `nibs` reader.

use std::process::ExitCode;

use env_logger::Env;
use nibs::cli::{
    CommandContext,
    args::{self, Cli},
    commands,
};

/// Initializes logging at `warn`, unless `RUST_LOG` says otherwise.
fn setup_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
}

fn main() -> ExitCode {
    setup_logger();

    let Cli { quiet, command } = args::parse_cli();

    let ctx = if command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };
    let mut ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    ctx.quiet = quiet;

    commands::run(command, &mut ctx)
}
