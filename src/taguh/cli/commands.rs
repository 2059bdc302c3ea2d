//! Command dispatch for the CLI.
//!
//! - `run()`: parses arguments, sets up logging and context, dispatches
//! - `handle_*()`: per-command handlers that call the API and print
//! - `report_error()`: the one place errors reach the terminal

use super::render::{
    print_messages, render_file_list, render_file_results, render_tag_list,
};
use super::setup::{init_logging, Cli, Commands, FindKind, ListKind};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::path::Path;
use taguh::api::TaguhApi;
use taguh::error::{Result, TaguhError};
use taguh::init::initialize;
use taguh::query::TagMatch;
use taguh::store::fs::FileStore;

struct AppContext {
    api: TaguhApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = parse_args();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        print!("{}", Cli::command().render_help());
        return Ok(());
    };

    let mut ctx = init_context(cli.data_dir)?;

    match command {
        Commands::Add { tag, args } => handle_add(&mut ctx, tag, args),
        Commands::List { kind } => handle_list(&mut ctx, kind),
        Commands::Find {
            kind,
            arg,
            option,
            exact,
        } => handle_find(&mut ctx, kind, arg, option, exact),
    }
}

/// Prints `err` to stderr.
pub fn report_error(err: &TaguhError) {
    eprintln!("{} {}", "ERROR:".red().bold(), err);
}

/// Like `Cli::parse`, but argument errors exit with 1 instead of clap's 2.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprint!("{e}");
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

fn init_context(data_dir: Option<std::path::PathBuf>) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(|e| TaguhError::io(".", e))?;
    let ctx = initialize(&cwd, data_dir)?;
    tracing::debug!(config = ?ctx.config, "configuration loaded");
    Ok(AppContext { api: ctx.api })
}

fn handle_add(ctx: &mut AppContext, tag: bool, args: Vec<String>) -> Result<()> {
    if args.len() < 2 {
        return Err(TaguhError::Usage("add".to_string()));
    }
    let (first, rest) = args.split_at(1);

    let result = if tag {
        ctx.api.add_tag(&first[0], rest)?
    } else {
        ctx.api.add_file(Path::new(&first[0]), rest)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, kind: Option<ListKind>) -> Result<()> {
    let Some(kind) = kind else {
        return Err(TaguhError::Usage("list".to_string()));
    };

    match kind {
        ListKind::Files => {
            let result = ctx.api.list_files()?;
            print!("{}", render_file_list(&result.files));
            print_messages(&result.messages);
        }
        ListKind::Tags => {
            let result = ctx.api.list_tags()?;
            print!("{}", render_tag_list(&result.tags));
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_find(
    ctx: &mut AppContext,
    kind: Option<FindKind>,
    arg: Option<String>,
    option: Option<String>,
    exact: bool,
) -> Result<()> {
    let (Some(kind), Some(arg)) = (kind, arg.filter(|a| !a.is_empty())) else {
        return Err(TaguhError::Usage("find".to_string()));
    };

    let result = match kind {
        FindKind::File => {
            if let Some(option) = &option {
                tracing::warn!(option = %option, "sort options only apply to `find tag`");
            }
            ctx.api.find_file(&arg)?
        }
        FindKind::Tag => {
            let mode = if exact {
                TagMatch::Exact
            } else {
                TagMatch::Substring
            };
            ctx.api.find_tag(&arg, option.as_deref(), mode)?
        }
    };

    print!("{}", render_file_results(&result.files));
    print_messages(&result.messages);
    Ok(())
}
