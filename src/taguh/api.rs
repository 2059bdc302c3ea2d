//! # API Facade
//!
//! A thin layer over `commands/`. It is the single entry point for every
//! taguh operation and does three things only:
//! - **normalizes inputs**: relative file paths become absolute, raw sort
//!   option strings become [`SortOption`]s (falling back to the configured
//!   default)
//! - **dispatches** to the command function
//! - **returns** the command's [`CmdResult`] unchanged
//!
//! No printing, no exit codes, no business rules.
//!
//! `TaguhApi<S: DataStore>` is generic over the store: `FileStore` in the
//! binary, `InMemoryStore` in tests.

use crate::commands;
use crate::error::{Result, TaguhError};
use crate::query::{SortOption, TagMatch};
use crate::store::DataStore;
use std::path::{Component, Path, PathBuf};

pub struct TaguhApi<S: DataStore> {
    store: S,
    default_sort: Option<SortOption>,
}

impl<S: DataStore> TaguhApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_sort: None,
        }
    }

    pub fn with_default_sort(mut self, sort: Option<SortOption>) -> Self {
        self.default_sort = sort;
        self
    }

    pub fn add_file(&mut self, path: &Path, tags: &[String]) -> Result<CmdResult> {
        let absolute = std::path::absolute(path).map_err(|e| TaguhError::io(path, e))?;
        commands::add::add_file(&mut self.store, &lexically_clean(&absolute), tags)
    }

    pub fn add_tag(&mut self, name: &str, description: &[String]) -> Result<CmdResult> {
        commands::add::add_tag(&mut self.store, name, description)
    }

    pub fn list_files(&self) -> Result<CmdResult> {
        commands::list::files(&self.store)
    }

    pub fn list_tags(&mut self) -> Result<CmdResult> {
        commands::list::tags(&mut self.store)
    }

    pub fn find_file(&self, needle: &str) -> Result<CmdResult> {
        commands::find::file(&self.store, needle)
    }

    /// The sort option is validated before anything is read from the store.
    pub fn find_tag(
        &mut self,
        tag_name: &str,
        sort: Option<&str>,
        mode: TagMatch,
    ) -> Result<CmdResult> {
        let sort = match sort {
            Some(raw) => Some(raw.parse::<SortOption>()?),
            None => self.default_sort,
        };
        commands::find::tag(&mut self.store, tag_name, sort, mode)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Drops `.` and resolves `..` without touching the filesystem, so every
/// spelling of a path maps to one record key. Trailing separators go too.
fn lexically_clean(path: &Path) -> PathBuf {
    let mut clean = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = clean.components().next_back();
                if matches!(last, Some(Component::Normal(_))) {
                    clean.pop();
                } else if !matches!(last, Some(Component::RootDir | Component::Prefix(_))) {
                    clean.push(component);
                }
            }
            other => clean.push(other),
        }
    }
    clean
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::model::{FileEntry, TagEntry};
