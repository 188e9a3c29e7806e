//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use nibs_document::strip_markup;
pub use nibs_highlight::{dim, header, notice, rule, subheader, warning};
use nibs_highlight::{Highlighter, emphasize_terms};
use nibs_index::{SearchHit, SearchReport};
use nibs_reader::{Notice, SectionOutline, Snippet};
use serde::Serialize;

/// JSON output for a search.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The normalized query.
    query: &'a str,
    /// Query terms, in order.
    terms: &'a [String],
    /// Matches before deduplication.
    raw_match_count: usize,
    /// Matched subsections.
    results: &'a [SearchHit],
}

/// Prints reader notices, one per line.
///
/// Notices reporting a request that could not be served are shown as warnings.
pub fn print_notices(notices: &[Notice]) {
    for n in notices {
        let text = n.to_string();
        if n.is_failure() {
            println!("{}", warning(&text));
        } else {
            println!("{}", notice(&text));
        }
    }
}

/// Prints a search report as pretty JSON.
pub fn output_search_json(report: &SearchReport) -> ExitCode {
    let json_output = JsonSearchOutput {
        query: &report.query,
        terms: &report.terms,
        raw_match_count: report.raw_match_count,
        results: &report.hits,
    };
    match serde_json::to_string_pretty(&json_output) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints search hits with the query terms emphasized in each context.
pub fn output_search_hits(report: &SearchReport) {
    for hit in &report.hits {
        println!();
        println!(
            "{} {}",
            subheader(&hit.label),
            dim(&format!("[{} / {}]", hit.section_id, hit.subsection_id))
        );
        println!("   {}", emphasize_terms(&hit.context, &report.terms));
    }
}

/// Prints a document's structure map, marking the current position.
pub fn output_outline(outline: &[SectionOutline], current: Option<(&str, &str)>) {
    for section in outline {
        println!("{} {}", header(&section.title), dim(&format!("({})", section.id)));
        if section.subsections.is_empty() {
            println!("   {}", dim("(no subsections)"));
        }
        for sub in &section.subsections {
            let marker = if current == Some((section.id.as_str(), sub.id.as_str())) {
                ">"
            } else {
                " "
            };
            println!("{marker}  {} {}", sub.title, dim(&format!("({})", sub.id)));
        }
    }
}

/// Prints subsection content under its label.
///
/// Plain text has markup removed; raw output is syntax highlighted.
pub fn output_subsection(label: &str, content: &str, raw: bool) {
    println!();
    println!("{}", header(label));
    println!("{}", rule(40));
    if raw {
        let highlighter = Highlighter::new();
        println!("{}", highlighter.highlight_markup(content).trim_end());
    } else {
        println!("{}", strip_markup(content).trim());
    }
}

/// Prints snippets, oldest first.
pub fn output_snippets(snippets: &[Snippet]) {
    if snippets.is_empty() {
        println!("{}", dim("No snippets."));
        return;
    }
    for snippet in snippets {
        println!(
            "{} {} {}",
            subheader(&format!("#{}", snippet.id)),
            snippet.text,
            dim(&format!(
                "({}, {})",
                snippet.source,
                snippet.created_at.format("%Y-%m-%d %H:%M")
            ))
        );
    }
}
