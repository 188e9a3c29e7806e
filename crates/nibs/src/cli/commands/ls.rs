//! Implementation of `nibs ls`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, header},
};

/// Lists the documents available in the configured libraries.
pub fn run(ctx: &mut CommandContext, cmd: &LsCommand) -> ExitCode {
    if let Err(code) = ctx.require_libraries(true) {
        return code;
    }

    let library = match ctx.library() {
        Ok(library) => library,
        Err(code) => return code,
    };

    let summaries = library.summaries();
    if summaries.is_empty() {
        println!("{}", dim("No documents found."));
        return ExitCode::SUCCESS;
    }

    if !cmd.long {
        for summary in &summaries {
            println!(
                "{} {} {}",
                header(&summary.id),
                dim("—"),
                summary.title
            );
        }
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Id", "Title", "Author", "Type", "Year", "Sections"]);
    for summary in &summaries {
        table.add_row(vec![
            Cell::new(&summary.id),
            Cell::new(&summary.title),
            Cell::new(summary.author.as_deref().unwrap_or("-")),
            Cell::new(summary.kind.as_deref().unwrap_or("-")),
            Cell::new(summary.year.as_deref().unwrap_or("-")),
            Cell::new(summary.section_count.to_string()),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
