use crate::tags::TagSet;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Layout of every persisted timestamp, e.g. `2024-03-09 17:04:55`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tags created the first time an empty tag document is read.
pub const SEED_TAGS: [(&str, &str); 3] = [
    ("Starred", "Tag for favourite files"),
    ("Important", "Tag for important files"),
    (
        "Archived",
        "Tag for archived files or files that may not be used anymore",
    ),
];

pub type FileMap = BTreeMap<String, FileRecord>;
pub type TagMap = BTreeMap<String, TagRecord>;

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// A tagged file. The key (its path) lives in the surrounding map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(default)]
    pub tags: TagSet,
    // Kept as the raw string so values that fail to parse survive a rewrite.
    #[serde(default)]
    pub created_on: String,
}

impl FileRecord {
    pub fn new(tags: TagSet) -> Self {
        Self {
            tags,
            created_on: now_timestamp(),
        }
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_on)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_on: String,
}

impl TagRecord {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            created_on: now_timestamp(),
        }
    }
}

pub fn seed_tags() -> TagMap {
    SEED_TAGS
        .iter()
        .map(|(name, description)| (name.to_string(), TagRecord::new(*description)))
        .collect()
}

/// Looks up a tag key ignoring case, returning the key as stored.
pub fn find_tag_key<'a>(tags: &'a TagMap, name: &str) -> Option<&'a str> {
    tags.keys()
        .find(|key| crate::tags::same_tag(key, name))
        .map(String::as_str)
}

/// A file path paired with its record, as returned by queries and listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub record: FileRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub name: String,
    pub record: TagRecord,
}
