//! Checks run before a mutation or a query touches the store.

use crate::model::{find_tag_key, TagMap};
use std::path::Path;

/// True iff `path` exists. No permission or content checks.
pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

/// Splits a user-supplied `a,b,c` candidate list.
pub fn candidate_list(csv: &str) -> Vec<String> {
    if csv.is_empty() {
        return Vec::new();
    }
    csv.split(',').map(str::to_string).collect()
}

/// The candidates with no case-insensitive match in `current`, in input order.
pub fn missing_tags<S: AsRef<str>>(candidates: &[S], current: &TagMap) -> Vec<String> {
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| find_tag_key(current, name).is_none())
        .map(str::to_string)
        .collect()
}

/// True iff every candidate names an existing tag, ignoring case.
/// An empty candidate list passes.
pub fn tags_exist<S: AsRef<str>>(candidates: &[S], current: &TagMap) -> bool {
    missing_tags(candidates, current).is_empty()
}
