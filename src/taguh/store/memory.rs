use super::DataStore;
use crate::error::Result;
use crate::model::{seed_tags, FileMap, TagMap};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    files: FileMap,
    /// `None` until the tag document is first loaded or written.
    tags: Option<TagMap>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn ensure_data_layout(&mut self) -> Result<()> {
        Ok(())
    }

    fn load_tags(&mut self) -> Result<TagMap> {
        Ok(self.tags.get_or_insert_with(seed_tags).clone())
    }

    fn load_files(&self) -> Result<FileMap> {
        Ok(self.files.clone())
    }

    fn replace_tags(&mut self, tags: &TagMap) -> Result<()> {
        self.tags = Some(tags.clone());
        Ok(())
    }

    fn replace_files(&mut self, files: &FileMap) -> Result<()> {
        self.files = files.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{FileRecord, TagRecord};
    use crate::tags::TagSet;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A store whose tag document already holds the seed tags.
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.load_tags().unwrap();
            Self { store }
        }

        pub fn with_tag(mut self, name: &str, description: &str) -> Self {
            let mut tags = self.store.load_tags().unwrap();
            tags.insert(name.to_string(), TagRecord::new(description));
            self.store.replace_tags(&tags).unwrap();
            self
        }

        pub fn with_file(mut self, path: &str, tags_csv: &str, created_on: &str) -> Self {
            let mut files = self.store.load_files().unwrap();
            files.insert(
                path.to_string(),
                FileRecord {
                    tags: TagSet::from_csv(tags_csv),
                    created_on: created_on.to_string(),
                },
            );
            self.store.replace_files(&files).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn seeds_tags_on_first_load() {
        let mut store = InMemoryStore::new();
        let tags = store.load_tags().unwrap();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains_key("Starred"));
    }

    #[test]
    fn emptied_tag_document_is_not_reseeded() {
        let mut store = InMemoryStore::new();
        store.load_tags().unwrap();
        store.replace_tags(&TagMap::new()).unwrap();
        assert!(store.load_tags().unwrap().is_empty());
    }

    #[test]
    fn files_start_empty() {
        let store = InMemoryStore::new();
        assert!(store.load_files().unwrap().is_empty());
    }

    #[test]
    fn fixture_builds_files_and_tags() {
        let mut fixture = StoreFixture::default()
            .with_tag("work", "Work files")
            .with_file("/a/report.txt", "work", "2024-01-01 00:00:00");

        let tags = fixture.store.load_tags().unwrap();
        assert_eq!(tags.len(), 4);
        let files = fixture.store.load_files().unwrap();
        assert_eq!(files["/a/report.txt"].tags.to_csv(), "work");
    }
}
