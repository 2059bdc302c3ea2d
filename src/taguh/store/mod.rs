//! # Storage Layer
//!
//! taguh keeps its whole state in two documents: one mapping file paths to
//! their tags, one mapping tag names to their descriptions. The [`DataStore`]
//! trait exposes them with load-all / replace-all semantics only. There are
//! no partial updates: callers load a map, change it, and hand the whole map
//! back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a data directory
//!   ```text
//!   data/
//!   ├── taguh.json   # path -> { tags, created_on }
//!   └── tags.json    # name -> { description, created_on }
//!   ```
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! Both implementations seed the tag document with [`crate::model::SEED_TAGS`]
//! when the document has never been written (missing or blank file). A
//! document holding `{}` loads as an empty map.
//!
//! Nothing is cached between calls and nothing is locked: two processes
//! replacing the same document concurrently means the last writer wins.

use crate::error::Result;
use crate::model::{FileMap, TagMap};

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Creates whatever the store needs before first use. Idempotent.
    fn ensure_data_layout(&mut self) -> Result<()>;

    /// Loads every tag, seeding (and persisting) the defaults when the
    /// document has never been written.
    fn load_tags(&mut self) -> Result<TagMap>;

    /// Loads every file record. An empty document is an empty map.
    fn load_files(&self) -> Result<FileMap>;

    fn replace_tags(&mut self, tags: &TagMap) -> Result<()>;

    fn replace_files(&mut self, files: &FileMap) -> Result<()>;
}
