//! CLI support for the `nibs` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod output;

pub use context::{CommandContext, Session};
