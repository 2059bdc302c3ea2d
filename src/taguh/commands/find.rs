use crate::commands::{file_entries, CmdResult};
use crate::error::{Result, TaguhError};
use crate::query::{find_by_file_substring, find_by_tag, sort_paths, SortOption, TagMatch};
use crate::store::DataStore;

const NOTHING_FOUND: &str = "No such file found in taguh";

/// Files whose name contains `needle`.
pub fn file<S: DataStore>(store: &S, needle: &str) -> Result<CmdResult> {
    let files = store.load_files()?;
    let paths = find_by_file_substring(&files, needle);
    if paths.is_empty() {
        return Err(TaguhError::NotFound(NOTHING_FOUND.to_string()));
    }
    Ok(CmdResult::default().with_files(file_entries(paths, &files)))
}

/// Files carrying `tag_name`, ordered by `sort` when there is more than one.
pub fn tag<S: DataStore>(
    store: &mut S,
    tag_name: &str,
    sort: Option<SortOption>,
    mode: TagMatch,
) -> Result<CmdResult> {
    let tags = store.load_tags()?;
    let files = store.load_files()?;

    let mut paths = find_by_tag(&files, &tags, tag_name, mode)?;
    if paths.is_empty() {
        return Err(TaguhError::NotFound(NOTHING_FOUND.to_string()));
    }
    if let Some(option) = sort {
        if paths.len() > 1 {
            paths = sort_paths(option, paths, &files);
        }
    }
    Ok(CmdResult::default().with_files(file_entries(paths, &files)))
}
