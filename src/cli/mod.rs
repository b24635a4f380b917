//! CLI subcommand implementations for the gavel binary.

pub mod download_cmd;
pub mod export_cmd;
pub mod fetch_cmd;
pub mod output;
pub mod repl;
