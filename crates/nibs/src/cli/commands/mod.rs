//! Command implementations and dispatch.

pub mod check;
pub mod compile;
pub mod init;
pub mod ls;
pub mod notes;
pub mod open;
pub mod search;
pub mod show;
pub mod snippet;
pub mod status;
pub mod text_size;
pub mod toc;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Check => check::run(ctx),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Open(cmd) => open::run(ctx, &cmd),
        Commands::Toc => toc::run(ctx),
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Snippet { action } => snippet::run(ctx, &action),
        Commands::Highlight => snippet::toggle_highlight(ctx),
        Commands::Select(cmd) => snippet::select(ctx, &cmd),
        Commands::Notes(cmd) => notes::run(ctx, &cmd),
        Commands::Compile => compile::run(ctx),
        Commands::TextSize(cmd) => text_size::run(ctx, &cmd),
    }
}
