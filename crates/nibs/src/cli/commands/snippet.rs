//! Implementation of `nibs snippet`, `nibs highlight` and `nibs select`.

use std::process::ExitCode;

use crate::cli::{
    args::{SelectCommand, SnippetAction},
    context::CommandContext,
    output::output_snippets,
};

/// Adds, lists or deletes snippets.
pub fn run(ctx: &mut CommandContext, action: &SnippetAction) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };

    match action {
        SnippetAction::Add { text } => {
            session.reader.create_snippet(text);
        }
        SnippetAction::Ls => {
            output_snippets(session.reader.snippets());
            return ExitCode::SUCCESS;
        }
        SnippetAction::Rm { id } => {
            if !session.reader.delete_snippet(*id) {
                eprintln!("warning: no snippet with id {id}");
            }
        }
    }

    session.save()
}

/// Switches highlight mode on or off.
pub fn toggle_highlight(ctx: &mut CommandContext) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };
    session.reader.toggle_highlight_mode();
    session.save()
}

/// Handles a text selection; in highlight mode it becomes a snippet.
pub fn select(ctx: &mut CommandContext, cmd: &SelectCommand) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };
    session.reader.handle_selection(&cmd.text);
    session.save()
}
