//! Implementation of `nibs show`.

use std::process::ExitCode;

use crate::cli::{args::ShowCommand, context::CommandContext, output::output_subsection};

/// Displays a subsection and makes it the current position.
///
/// Without arguments the current position is shown again.
pub fn run(ctx: &mut CommandContext, cmd: &ShowCommand) -> ExitCode {
    let mut session = match ctx.session() {
        Ok(session) => session,
        Err(code) => return code,
    };
    let reader = &mut session.reader;

    let shown = match (&cmd.section, &cmd.subsection) {
        (Some(section), Some(subsection)) => reader.display(section, subsection).cloned(),
        (Some(section), None) => reader.navigate_to_section(section).cloned(),
        (None, _) => {
            let (section, subsection) = reader
                .position()
                .map(|p| (p.section_id.clone(), p.subsection_id.clone()))
                .unwrap_or_default();
            reader.display(&section, &subsection).cloned()
        }
    };
    let label = reader.current_location();

    session.flush();
    if let Some(subsection) = shown {
        output_subsection(&label, &subsection.content, cmd.raw);
    }

    session.save()
}
