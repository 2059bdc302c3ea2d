//! # CLI Behavior
//!
//! This is the terminal client for taguh. It is the only place that knows
//! about stdout/stderr, colours, and exit codes.
//!
//! ## Commands
//!
//! - `taguh add <path> <tag...>` tags a file. Tags must exist already.
//! - `taguh add -t <name> <description...>` defines (or redescribes) a tag.
//! - `taguh list files` / `taguh list tags` dumps everything.
//! - `taguh find file <substring>` searches file names.
//! - `taguh find tag <name> [newest|oldest|asc|desc]` lists files with a tag.
//!
//! Arguments are positional, mirroring how people type them. Missing
//! arguments produce a one-line hint pointing at `taguh <cmd> -h`.
//!
//! ## Exit Codes
//!
//! - `0`: success, including "already added"
//! - `1`: usage errors, unknown files/tags/options, empty search results
//! - `255`: the data documents could not be read, written, or parsed
//!
//! ## Module Structure
//!
//! - `commands`: Per-command handlers that call the API and print results
//! - `render`: Output formatting (record blocks, lists, coloured messages)
//! - `setup`: Argument parsing via clap, logging setup

mod commands;
mod render;
pub mod setup;

pub use commands::{report_error, run};
