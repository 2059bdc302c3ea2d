//! Tag sets and the merge rule used by `add`.
//!
//! On disk a file's tags are a single comma-joined string (`"Starred,work"`).
//! In memory they are a [`TagSet`]: an insertion-ordered list of names where
//! identity is case-insensitive. The CSV form only exists at the serde
//! boundary.
//!
//! Merging keeps the spelling already stored for a tag and appends genuinely
//! new tags in the order they were requested:
//!
//! ```
//! use taguh::tags::merge_tags;
//!
//! assert_eq!(merge_tags("a,b", &["B", "c"]), ("a,b,c".to_string(), true));
//! assert_eq!(merge_tags("a,b", &["A", "B"]), ("a,b".to_string(), false));
//! ```

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const SEPARATOR: char = ',';

/// Case-insensitive tag identity.
pub fn same_tag(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// An ordered set of tag names with case-insensitive identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    names: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the persisted comma-joined form. Segments are kept verbatim so
    /// that writing an unmodified set back produces the same string.
    pub fn from_csv(csv: &str) -> Self {
        if csv.is_empty() {
            return Self::new();
        }
        Self {
            names: csv.split(SEPARATOR).map(str::to_string).collect(),
        }
    }

    pub fn to_csv(&self) -> String {
        self.names.join(",")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| same_tag(n, name))
    }

    /// Adds `name` unless an equivalent tag is already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Adds every requested tag not already present and returns the ones
    /// that were actually added, in request order.
    pub fn merge<S: AsRef<str>>(&mut self, requested: &[S]) -> Vec<String> {
        requested
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.insert(name))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_csv())
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl Serialize for TagSet {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&self.to_csv())
    }
}

struct TagSetVisitor;

impl Visitor<'_> for TagSetVisitor {
    type Value = TagSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a comma-joined list of tag names")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TagSet, E> {
        Ok(TagSet::from_csv(v))
    }
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TagSetVisitor)
    }
}

/// Merges `requested` into the comma-joined `existing_csv`.
///
/// Returns the new CSV and whether anything was added. When nothing was
/// added the caller must leave the record untouched.
pub fn merge_tags<S: AsRef<str>>(existing_csv: &str, requested: &[S]) -> (String, bool) {
    let mut set = TagSet::from_csv(existing_csv);
    let added = set.merge(requested);
    (set.to_csv(), !added.is_empty())
}
