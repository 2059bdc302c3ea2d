//! `add`: tag a file, or define a new tag.

use crate::commands::{file_entries, CmdMessage, CmdResult};
use crate::error::{Result, TaguhError};
use crate::model::{find_tag_key, FileRecord, TagEntry, TagRecord};
use crate::store::DataStore;
use crate::tags::TagSet;
use crate::validate::{candidate_list, file_exists, missing_tags, tags_exist};
use std::path::Path;

/// Adds `tags` to the file at `path`.
///
/// `path` is used verbatim as the record key, so callers should pass an
/// absolute path. Tag arguments may be comma lists. Every tag must already exist. Tags the file already carries
/// (ignoring case) are skipped; if that leaves nothing to add the store is not
/// written at all.
pub fn add_file<S: DataStore>(store: &mut S, path: &Path, tags: &[String]) -> Result<CmdResult> {
    let requested = requested_tags(tags);
    if requested.is_empty() {
        return Err(TaguhError::Usage("add".to_string()));
    }
    if !file_exists(path) {
        return Err(TaguhError::FileNotFound(path.to_path_buf()));
    }

    let registry = store.load_tags()?;
    if !tags_exist(&requested, &registry) {
        return Err(TaguhError::TagNotFound(missing_tags(&requested, &registry)));
    }

    let key = path.to_string_lossy().into_owned();
    let mut files = store.load_files()?;
    let mut tag_set = files
        .get(&key)
        .map(|record| record.tags.clone())
        .unwrap_or_else(TagSet::new);

    let added = tag_set.merge(&requested);
    let skipped = skipped_tags(&requested, &added);

    let mut result = CmdResult::default();
    if added.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} is already added to taguh",
            key
        )));
        return Ok(result.with_files(file_entries(vec![key], &files)));
    }

    // Any change to the tag set refreshes the timestamp.
    files.insert(key.clone(), FileRecord::new(tag_set));
    store.replace_files(&files)?;
    tracing::debug!(path = %key, added = ?added, "file tagged");

    result.add_message(CmdMessage::success(format!(
        "Tagged {} with [{}]",
        key,
        added.join(", ")
    )));
    if !skipped.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Skipped [{}]: already on this file",
            skipped.join(", ")
        )));
    }

    Ok(result.with_files(file_entries(vec![key], &files)))
}

/// Defines the tag `name`, described by `description` joined with spaces.
///
/// Redefining an existing tag (ignoring case) replaces its description but
/// keeps the stored spelling and creation time.
pub fn add_tag<S: DataStore>(
    store: &mut S,
    name: &str,
    description: &[String],
) -> Result<CmdResult> {
    if name.is_empty() || description.is_empty() {
        return Err(TaguhError::Usage("add".to_string()));
    }
    // Names are stored comma-joined on file records.
    if name.contains(',') {
        return Err(TaguhError::InvalidTagName(name.to_string()));
    }
    let description = description.join(" ");

    let mut tags = store.load_tags()?;
    let mut result = CmdResult::default();

    let existing = find_tag_key(&tags, name).map(str::to_string);
    let key = match existing {
        Some(key) => {
            if let Some(record) = tags.get_mut(&key) {
                record.description = description;
            }
            result.add_message(CmdMessage::success(format!(
                "Updated description of tag '{}'",
                key
            )));
            key
        }
        None => {
            tags.insert(name.to_string(), TagRecord::new(description));
            result.add_message(CmdMessage::success(format!("Created tag '{}'", name)));
            name.to_string()
        }
    };
    store.replace_tags(&tags)?;

    let entry = tags.get(&key).cloned().map(|record| TagEntry { name: key, record });
    Ok(result.with_tags(entry.into_iter().collect()))
}

/// Each argument may itself be a comma list (`Starred,work`). Empty segments
/// are dropped.
fn requested_tags(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| candidate_list(arg))
        .filter(|name| !name.is_empty())
        .collect()
}

/// The requested tags `merge` did not add. `added` is an ordered subsequence
/// of `requested`.
fn skipped_tags<'a>(requested: &'a [String], added: &[String]) -> Vec<&'a str> {
    let mut added = added.iter().peekable();
    requested
        .iter()
        .filter(|name| {
            if added.peek() == Some(name) {
                added.next();
                false
            } else {
                true
            }
        })
        .map(String::as_str)
        .collect()
}
