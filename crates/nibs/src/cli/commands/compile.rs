//! Implementation of `nibs compile`.

use std::process::ExitCode;

use crate::cli::context::CommandContext;

/// Prints a study document built from every snippet.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };

    let study = session.reader.create_study_document();
    session.flush();
    if let Some(markup) = study {
        print!("{markup}");
    }

    ExitCode::SUCCESS
}
