//! Implementation of `nibs open`.

use std::process::ExitCode;

use crate::cli::{args::OpenCommand, context::CommandContext};

/// Loads a library document into the session.
pub fn run(ctx: &mut CommandContext, cmd: &OpenCommand) -> ExitCode {
    if let Err(code) = ctx.require_libraries(true) {
        return code;
    }

    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };
    let library = match ctx.library() {
        Ok(library) => library,
        Err(code) => return code,
    };

    if !session.reader.load_from_library(library, &cmd.id) {
        eprintln!("error: no document with id '{}'", cmd.id);
        eprintln!("Run 'nibs ls' to list available documents.");
        return ExitCode::FAILURE;
    }

    session.save()
}
