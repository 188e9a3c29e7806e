//! Implementation of `nibs search`.

use std::process::ExitCode;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{output_search_hits, output_search_json, print_notices},
};

/// Searches the current document.
///
/// With `--json` only the report is printed; status notices are left out.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };

    let query = cmd.query.join(" ");
    let report = session.reader.search(&query).cloned();
    let notices = session.reader.announcer_mut().take();

    let Some(report) = report else {
        print_notices(&notices);
        return ExitCode::SUCCESS;
    };

    if cmd.json {
        return output_search_json(&report);
    }

    print_notices(&notices);
    output_search_hits(&report);
    ExitCode::SUCCESS
}
