//! Index (staging area)
//!
//! The index tracks which files should be captured by the next commit:
//! a persisted mapping of logical path → content id, stored as a single
//! canonical JSON document at `<repo_root>/index`.
//!
//! ## Persistence
//!
//! Saving replaces the whole document (write-temp-then-rename), never a
//! partial in-place write, so a crash mid-save cannot leave a readable but
//! corrupt index behind. The `BTreeMap` keeps the serialized key order
//! stable, which pins the hashes of downstream commits.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use fake::rand;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

/// Index (staging area)
///
/// Tracks the path → content id entries staged for the next commit.
/// Paths are unique keys; staging a path again overwrites its entry
/// (last write wins), though the previously staged object stays in the
/// database.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.minigit/index`)
    path: Box<Path>,
    /// Staged entries mapped by path
    entries: BTreeMap<String, ObjectId>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    /// Create a new empty index
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the index file (`.minigit/index`)
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    /// Get the path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// Reads and parses the index file. If the file does not exist yet
    /// (first use after init) or is empty, the in-memory mapping is simply
    /// cleared.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path().exists() {
            return Ok(());
        }

        let content = std::fs::read(self.path())?;
        if content.is_empty() {
            return Ok(());
        }

        self.entries =
            serde_json::from_slice(&content).map_err(|source| Error::MalformedIndex {
                path: self.path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    /// Stage an entry in memory
    ///
    /// Last write for a given path wins; the prior content id for that
    /// path is discarded from the mapping (but not from the database).
    pub fn add(&mut self, path: String, object_id: ObjectId) {
        self.entries.insert(path, object_id);
        self.changed = true;
    }

    /// Load, set one entry, and save, as a single composition.
    pub fn stage(&mut self, path: String, object_id: ObjectId) -> Result<()> {
        self.rehydrate()?;
        self.add(path, object_id);
        self.write_updates()
    }

    /// Persist the index to disk
    ///
    /// Serializes the full mapping and atomically replaces the index file
    /// via a temp file and rename.
    pub fn write_updates(&mut self) -> Result<()> {
        let content =
            serde_json::to_vec(&self.entries).map_err(|source| Error::MalformedIndex {
                path: self.path.to_path_buf(),
                source,
            })?;

        let index_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let temp_index_path = index_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_index_path)?;
        file.write_all(&content)?;

        std::fs::rename(&temp_index_path, self.path())?;
        self.changed = false;

        Ok(())
    }

    /// Look up the staged content id for a path
    pub fn entry_by_path(&self, path: &str) -> Option<&ObjectId> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    /// Clone the current mapping (the snapshot a commit captures)
    pub fn snapshot(&self) -> BTreeMap<String, ObjectId> {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether in-memory entries differ from what was last loaded or saved
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn generate_temp_name() -> String {
        format!("tmp-index-{}", rand::random::<u32>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn oid() -> ObjectId {
        ObjectId::from_content(b"test data")
    }

    fn index_in(dir: &assert_fs::TempDir) -> Index {
        Index::new(dir.path().join("index").into_boxed_path())
    }

    #[rstest]
    fn test_missing_index_file_loads_as_empty(oid: ObjectId) {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_in(&dir);
        index.add("a.txt".to_string(), oid);

        index.rehydrate().unwrap();

        assert!(index.is_empty());
    }

    #[rstest]
    fn test_staged_entry_survives_reload(oid: ObjectId) {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_in(&dir);

        index.stage("a.txt".to_string(), oid.clone()).unwrap();

        let mut reloaded = index_in(&dir);
        reloaded.rehydrate().unwrap();
        pretty_assertions::assert_eq!(reloaded.entry_by_path("a.txt"), Some(&oid));
    }

    #[rstest]
    fn test_last_write_wins_for_a_path(oid: ObjectId) {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_in(&dir);
        let newer = ObjectId::from_content(b"newer data");

        index.stage("a.txt".to_string(), oid).unwrap();
        index.stage("a.txt".to_string(), newer.clone()).unwrap();

        let mut reloaded = index_in(&dir);
        reloaded.rehydrate().unwrap();
        pretty_assertions::assert_eq!(reloaded.len(), 1);
        pretty_assertions::assert_eq!(reloaded.entry_by_path("a.txt"), Some(&newer));
    }

    #[rstest]
    fn test_corrupt_index_file_is_reported(oid: ObjectId) {
        let dir = assert_fs::TempDir::new().unwrap();
        let mut index = index_in(&dir);
        index.stage("a.txt".to_string(), oid).unwrap();
        std::fs::write(index.path(), b"{ not an index").unwrap();

        let result = index.rehydrate();

        assert!(matches!(result, Err(Error::MalformedIndex { .. })));
    }
}
