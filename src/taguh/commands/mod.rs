//! Business logic for each taguh command.
//!
//! Commands take a [`DataStore`](crate::store::DataStore) and plain Rust
//! arguments and return a [`CmdResult`]. They never print and never exit;
//! that is the CLI's job.

use crate::model::{FileEntry, FileMap, TagEntry, TagMap};

pub mod add;
pub mod find;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub files: Vec<FileEntry>,
    pub tags: Vec<TagEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_files(mut self, files: Vec<FileEntry>) -> Self {
        self.files = files;
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagEntry>) -> Self {
        self.tags = tags;
        self
    }
}

/// Pairs each path with its record, skipping paths missing from `files`.
pub(crate) fn file_entries(paths: Vec<String>, files: &FileMap) -> Vec<FileEntry> {
    paths
        .into_iter()
        .filter_map(|path| {
            let record = files.get(&path)?.clone();
            Some(FileEntry { path, record })
        })
        .collect()
}

pub(crate) fn tag_entries(tags: TagMap) -> Vec<TagEntry> {
    tags.into_iter()
        .map(|(name, record)| TagEntry { name, record })
        .collect()
}
