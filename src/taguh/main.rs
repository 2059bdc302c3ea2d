//! # taguh CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/taguh/cli/`, and
//! this file only invokes `cli::run()` and turns an error into an exit code.
//! See the library docs for the layering below the CLI.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::report_error(&e);
        std::process::exit(e.exit_code());
    }
}
