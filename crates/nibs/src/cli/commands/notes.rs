//! Implementation of `nibs notes`.

use std::process::ExitCode;

use crate::cli::{args::NotesCommand, context::CommandContext, output::dim};

/// Prints the saved notes, or replaces them.
pub fn run(ctx: &mut CommandContext, cmd: &NotesCommand) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };

    let Some(text) = &cmd.text else {
        let notes = session.reader.notes();
        if notes.is_empty() {
            println!("{}", dim("No notes saved."));
        } else {
            println!("{notes}");
        }
        return ExitCode::SUCCESS;
    };

    session.reader.save_notes(text);
    session.save()
}
