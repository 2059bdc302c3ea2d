//! Query engine behind `find file` and `find tag`.
//!
//! Matching is deliberately plain: a file search is a case-sensitive substring
//! test on the last path component, and a tag search is (by default) a
//! case-sensitive substring test on the stored comma-joined tag string. The
//! latter means `Star` matches a file tagged `Starred`; [`TagMatch::Exact`]
//! is available for callers that want whole-tag matches instead.

use crate::error::{Result, TaguhError};
use crate::model::{find_tag_key, FileMap, TagMap};
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Most recently added first.
    Newest,
    /// Least recently added first.
    Oldest,
    /// Path, ascending.
    Asc,
    /// Path, descending.
    Desc,
}

impl FromStr for SortOption {
    type Err = TaguhError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(SortOption::Newest),
            "oldest" => Ok(SortOption::Oldest),
            "asc" => Ok(SortOption::Asc),
            "desc" => Ok(SortOption::Desc),
            _ => Err(TaguhError::InvalidOption(s.to_string())),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::Asc => "asc",
            SortOption::Desc => "desc",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagMatch {
    /// Raw substring test against the stored tag string.
    #[default]
    Substring,
    /// Whole-tag comparison, ignoring case.
    Exact,
}

/// Paths whose final component contains `needle`.
pub fn find_by_file_substring(files: &FileMap, needle: &str) -> Vec<String> {
    files
        .keys()
        .filter(|path| {
            Path::new(path.as_str())
                .file_name()
                .map(|name| name.to_string_lossy().contains(needle))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Paths of the files carrying `tag_name`.
///
/// Fails with [`TaguhError::TagNotFound`] when no tag of that name (ignoring
/// case) exists.
pub fn find_by_tag(
    files: &FileMap,
    tags: &TagMap,
    tag_name: &str,
    mode: TagMatch,
) -> Result<Vec<String>> {
    if find_tag_key(tags, tag_name).is_none() {
        return Err(TaguhError::TagNotFound(vec![tag_name.to_string()]));
    }

    let matches = files
        .iter()
        .filter(|(_, record)| match mode {
            TagMatch::Substring => record.tags.to_csv().contains(tag_name),
            TagMatch::Exact => record.tags.contains(tag_name),
        })
        .map(|(path, _)| path.clone())
        .collect();
    Ok(matches)
}

/// Orders `paths` according to `option`. Both timestamp orders are stable.
///
/// A `created_on` that does not parse sorts as the earliest possible time.
pub fn sort_paths(option: SortOption, mut paths: Vec<String>, files: &FileMap) -> Vec<String> {
    match option {
        SortOption::Newest => {
            let keyed = keyed_by_time(paths, files);
            paths = sorted_by_time(keyed, |a, b| b.cmp(a));
        }
        SortOption::Oldest => {
            let keyed = keyed_by_time(paths, files);
            paths = sorted_by_time(keyed, |a, b| a.cmp(b));
        }
        SortOption::Asc => paths.sort(),
        SortOption::Desc => paths.sort_by(|a, b| b.cmp(a)),
    }
    paths
}

fn keyed_by_time(paths: Vec<String>, files: &FileMap) -> Vec<(NaiveDateTime, String)> {
    paths
        .into_iter()
        .map(|path| {
            let created = files.get(&path).and_then(|record| {
                let parsed = record.created_at();
                if parsed.is_none() {
                    tracing::warn!(
                        path = %path,
                        created_on = %record.created_on,
                        "unparseable timestamp, sorting as earliest"
                    );
                }
                parsed
            });
            (created.unwrap_or(NaiveDateTime::MIN), path)
        })
        .collect()
}

fn sorted_by_time<F>(mut keyed: Vec<(NaiveDateTime, String)>, cmp: F) -> Vec<String>
where
    F: Fn(&NaiveDateTime, &NaiveDateTime) -> Ordering,
{
    keyed.sort_by(|(a, _), (b, _)| cmp(a, b));
    keyed.into_iter().map(|(_, path)| path).collect()
}
