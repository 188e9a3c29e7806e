//! Implementation of `nibs toc`.

use std::process::ExitCode;

use crate::cli::{
    context::CommandContext,
    output::{dim, output_outline, subheader},
};

/// Prints the structure map of the current document.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };
    let reader = &session.reader;

    let Some(document) = reader.document() else {
        println!("{}", dim("No document loaded."));
        println!("Run {} to load one.", subheader("nibs open <id>"));
        return ExitCode::SUCCESS;
    };

    println!("{}", subheader(&document.title));
    println!();

    let current = reader
        .position()
        .map(|p| (p.section_id.as_str(), p.subsection_id.as_str()));
    output_outline(&reader.structure(), current);

    ExitCode::SUCCESS
}
