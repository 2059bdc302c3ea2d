use super::DataStore;
use crate::error::{Result, TaguhError};
use crate::model::{seed_tags, FileMap, TagMap};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

pub const FILES_DOCUMENT: &str = "taguh.json";
pub const TAGS_DOCUMENT: &str = "tags.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn files_path(&self) -> PathBuf {
        self.root.join(FILES_DOCUMENT)
    }

    pub fn tags_path(&self) -> PathBuf {
        self.root.join(TAGS_DOCUMENT)
    }

    /// Reads a document, returning `None` when it is missing or blank.
    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| TaguhError::io(path, e))?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let value =
            serde_json::from_str(&content).map_err(|e| TaguhError::serialization(path, e))?;
        Ok(Some(value))
    }

    /// Rewrites a whole document. The new content goes to a sibling file
    /// first and is renamed over the target, so readers never see a partial
    /// write.
    fn write_document<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let content = to_tab_indented_json(value).map_err(|e| TaguhError::serialization(path, e))?;

        let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content).map_err(|e| TaguhError::io(&tmp_path, e))?;
        fs::rename(&tmp_path, path).map_err(|e| TaguhError::io(path, e))?;
        tracing::debug!(path = %path.display(), "document replaced");
        Ok(())
    }

    fn ensure_file(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::File::create(path).map_err(|e| TaguhError::io(path, e))?;
            tracing::debug!(path = %path.display(), "created empty document");
        }
        Ok(())
    }
}

fn to_tab_indented_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn ensure_data_layout(&mut self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| TaguhError::io(&self.root, e))?;
        }
        self.ensure_file(&self.tags_path())?;
        self.ensure_file(&self.files_path())?;
        Ok(())
    }

    fn load_tags(&mut self) -> Result<TagMap> {
        let path = self.tags_path();
        match self.read_document::<TagMap>(&path)? {
            Some(tags) => {
                tracing::debug!(count = tags.len(), "loaded tags");
                Ok(tags)
            }
            None => {
                let tags = seed_tags();
                tracing::debug!(path = %path.display(), "tag document empty, writing seed tags");
                self.write_document(&path, &tags)?;
                Ok(tags)
            }
        }
    }

    fn load_files(&self) -> Result<FileMap> {
        let files = self
            .read_document::<FileMap>(&self.files_path())?
            .unwrap_or_default();
        tracing::debug!(count = files.len(), "loaded files");
        Ok(files)
    }

    fn replace_tags(&mut self, tags: &TagMap) -> Result<()> {
        self.write_document(&self.tags_path(), tags)
    }

    fn replace_files(&mut self, files: &FileMap) -> Result<()> {
        self.write_document(&self.files_path(), files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_timestamp, FileRecord, TagRecord, SEED_TAGS};
    use crate::tags::TagSet;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> FileStore {
        let mut store = FileStore::new(temp.path().join("data"));
        store.ensure_data_layout().unwrap();
        store
    }

    #[test]
    fn layout_creates_empty_documents() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert_eq!(fs::read(store.files_path()).unwrap().len(), 0);
        assert_eq!(fs::read(store.tags_path()).unwrap().len(), 0);
    }

    #[test]
    fn layout_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        fs::write(store.files_path(), "{}").unwrap();

        store.ensure_data_layout().unwrap();
        assert_eq!(fs::read_to_string(store.files_path()).unwrap(), "{}");
    }

    #[test]
    fn empty_tag_document_is_seeded_and_persisted() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let tags = store.load_tags().unwrap();
        assert_eq!(tags.len(), SEED_TAGS.len());
        for (name, _) in SEED_TAGS {
            let tag = &tags[name];
            assert!(!tag.description.is_empty());
            assert!(parse_timestamp(&tag.created_on).is_some());
        }

        let on_disk = fs::read_to_string(store.tags_path()).unwrap();
        assert!(on_disk.contains("\"Starred\""));
        assert!(on_disk.contains("\n\t\"Archived\": {\n\t\t\"description\""));
    }

    #[test]
    fn missing_tag_document_is_seeded() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        let tags = store.load_tags().unwrap();
        assert_eq!(tags.len(), 3);
        assert!(store.tags_path().exists());
    }

    #[test]
    fn emptied_tag_document_stays_empty() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.ensure_data_layout().unwrap();
        store.replace_tags(&TagMap::new()).unwrap();
        assert!(store.load_tags().unwrap().is_empty());
    }

    #[test]
    fn empty_files_document_is_not_seeded() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.load_files().unwrap().is_empty());
        assert_eq!(fs::read(store.files_path()).unwrap().len(), 0);
    }

    #[test]
    fn replace_then_load_preserves_records() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let mut files = FileMap::new();
        files.insert(
            "/home/me/report.txt".into(),
            FileRecord {
                tags: TagSet::from_csv("Starred,work"),
                created_on: "2024-02-01 10:00:00".into(),
            },
        );
        files.insert(
            "/home/me/odd.txt".into(),
            FileRecord {
                tags: TagSet::from_csv("Archived"),
                created_on: "not a date".into(),
            },
        );
        store.replace_files(&files).unwrap();

        let loaded = store.load_files().unwrap();
        assert_eq!(loaded, files);

        let before = fs::read_to_string(store.files_path()).unwrap();
        store.replace_files(&loaded).unwrap();
        let after = fs::read_to_string(store.files_path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn replace_tags_overwrites_whole_document() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.load_tags().unwrap();

        let mut tags = TagMap::new();
        tags.insert("work".into(), TagRecord::new("Work stuff"));
        store.replace_tags(&tags).unwrap();

        let loaded = store.load_tags().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded["work"].description, "Work stuff");
        assert!(!temp.path().join("data").join("tags.json.tmp").exists());
    }

    #[test]
    fn reads_documents_written_by_hand() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(
            store.files_path(),
            "{\n\t\"/tmp/a.txt\": {\n\t\t\"tags\": \"Important\",\n\t\t\"created_on\": \"2023-12-31 23:59:59\"\n\t}\n}",
        )
        .unwrap();

        let files = store.load_files().unwrap();
        assert_eq!(files["/tmp/a.txt"].tags.to_csv(), "Important");
    }

    #[test]
    fn malformed_document_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.files_path(), "{ not json").unwrap();

        match store.load_files() {
            Err(TaguhError::Serialization { path, .. }) => assert_eq!(path, store.files_path()),
            other => panic!("expected serialization error, got {:?}", other),
        }
    }
}
