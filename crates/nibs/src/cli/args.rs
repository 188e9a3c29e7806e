//! Clap argument definitions for the `nibs` CLI.

use std::{env, process::exit, str::FromStr};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "nibs")]
#[command(about = "Accessible document reader - search, navigate and study structured texts")]
pub struct Cli {
    /// Send reader notices to the log (shown with RUST_LOG=info) instead of stdout
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `nibs init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.nibs.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `nibs ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Show author, type, year and section counts in a table
    #[arg(short = 'l', long)]
    pub long: bool,
}

/// Arguments for `nibs open`.
#[derive(Args, Debug, Clone)]
pub struct OpenCommand {
    /// Document id
    pub id: String,
}

/// Arguments for `nibs show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Section id (defaults to the current position)
    pub section: Option<String>,

    /// Subsection id (defaults to the first subsection of the section)
    pub subsection: Option<String>,

    /// Print the raw markup instead of plain text
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for `nibs search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Snippet subcommands.
#[derive(Clone, Subcommand, Debug)]
pub enum SnippetAction {
    /// Save text as a snippet sourced at the current position
    Add {
        /// Snippet text
        text: String,
    },
    /// List snippets
    Ls,
    /// Delete a snippet
    Rm {
        /// Snippet id
        id: u64,
    },
}

/// Arguments for `nibs select`.
#[derive(Args, Debug, Clone)]
pub struct SelectCommand {
    /// Selected text
    pub text: String,
}

/// Arguments for `nibs notes`.
#[derive(Args, Debug, Clone)]
pub struct NotesCommand {
    /// New notes; omit to print the saved notes
    pub text: Option<String>,
}

/// A requested text size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSizeChange {
    /// One configured step larger.
    Up,
    /// One configured step smaller.
    Down,
    /// An explicit number of pixels.
    By(i32),
}

impl FromStr for TextSizeChange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" | "+" => Ok(Self::Up),
            "down" | "-" => Ok(Self::Down),
            _ => s
                .parse()
                .map(Self::By)
                .map_err(|_| format!("expected up, down or a pixel delta, got '{s}'")),
        }
    }
}

/// Arguments for `nibs text-size`.
#[derive(Args, Debug, Clone)]
pub struct TextSizeCommand {
    /// `up`/`+` or `down`/`-` by the configured step, or a pixel delta such as -4;
    /// omit to print the current size
    #[arg(allow_negative_numbers = true)]
    pub change: Option<TextSizeChange>,
}

/// Supported `nibs` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize nibs configuration in current directory
    Init(InitCommand),

    /// Show configuration files, libraries and effective settings
    Status,

    /// Validate configuration and diagnose issues
    Check,

    /// List documents in the configured libraries
    Ls(LsCommand),

    /// Load a document into the session
    Open(OpenCommand),

    /// Show the structure of the current document
    Toc,

    /// Display a subsection
    Show(ShowCommand),

    /// Search the current document
    Search(SearchCommand),

    /// Manage snippets
    Snippet {
        /// Snippet action
        #[command(subcommand)]
        action: SnippetAction,
    },

    /// Toggle highlight mode
    Highlight,

    /// Handle a text selection (creates a snippet in highlight mode)
    Select(SelectCommand),

    /// Show or save notes
    Notes(NotesCommand),

    /// Print a study document compiled from all snippets
    Compile,

    /// Adjust the reading text size
    TextSize(TextSizeCommand),
}

impl Commands {
    /// Whether the command needs a loaded configuration.
    ///
    /// `init` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, printing hierarchical help for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_hierarchical_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help with hierarchical subcommand display.
fn print_hierarchical_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: nibs <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }

        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");

        for subsub in sub.get_subcommands() {
            let subname = subsub.get_name();
            if subname == "help" {
                continue;
            }
            let subabout = subsub
                .get_about()
                .map(|s| s.to_string())
                .unwrap_or_default();
            println!("    {subname:8} {subabout}");
        }
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
}
