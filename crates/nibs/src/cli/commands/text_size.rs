//! Implementation of `nibs text-size`.

use std::process::ExitCode;

use crate::cli::{
    args::{TextSizeChange, TextSizeCommand},
    context::CommandContext,
};

/// Adjusts the reading text size, or prints it when no change is given.
pub fn run(ctx: &mut CommandContext, cmd: &TextSizeCommand) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };

    let Some(change) = cmd.change else {
        println!("Text size is {} pixels", session.reader.text_size());
        return ExitCode::SUCCESS;
    };

    match change {
        TextSizeChange::Up => session.reader.increase_text_size(),
        TextSizeChange::Down => session.reader.decrease_text_size(),
        TextSizeChange::By(delta) => session.reader.adjust_text_size(delta),
    };
    session.save()
}
