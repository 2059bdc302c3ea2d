use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "taguh", bin_name = "taguh", version)]
#[command(about = "Tag files and find them again by tag", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding taguh.json and tags.json (default: ./data)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a file/tag to taguh
    Add {
        /// Add a new tag instead; args are then (tagname description...)
        #[arg(short = 't', long = "tag")]
        tag: bool,

        /// Args should be of the form (filepath tag1 tag2 .. tagn)
        #[arg(num_args = 0..)]
        args: Vec<String>,
    },

    /// List all files/tags added to taguh
    #[command(alias = "ls")]
    List {
        /// What to list
        #[arg(value_enum, ignore_case = true)]
        kind: Option<ListKind>,
    },

    /// Find files by name, or list the files carrying a tag
    Find {
        /// What to search for
        #[arg(value_enum, ignore_case = true)]
        kind: Option<FindKind>,

        /// The file name fragment or the tag name to find
        arg: Option<String>,

        /// For tags: newest, oldest, asc or desc
        option: Option<String>,

        /// For tags: match whole tag names (ignoring case) instead of substrings
        #[arg(long)]
        exact: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Files,
    Tags,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FindKind {
    File,
    Tag,
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose` when set.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "taguh=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
