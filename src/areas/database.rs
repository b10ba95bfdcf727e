//! Object database
//!
//! Durable content-addressable storage rooted at `<repo_root>/objects`.
//! The store is append-only: objects are never mutated or deleted once
//! written, so an id that was ever staged or committed keeps resolving.
//! The layout is flat, one file per object named by its full hex digest.

use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object, returning its content id.
    ///
    /// Serializes the object, hashes the serialized form, and writes it
    /// under that id unless an object with the same id already exists.
    /// Content addressing makes the skip unobservable: a byte-identical
    /// object is already on disk. The returned id is valid either way.
    pub fn store(&self, object: impl Object) -> Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        // write the object to disk unless it already exists,
        // creating the objects directory lazily on first use
        if !object_path.exists() {
            std::fs::create_dir_all(&self.path)?;
            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(object_id)
    }

    /// Load the verbatim content stored under the given id.
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        match std::fs::read(&object_path) {
            Ok(content) => Ok(content.into()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(Error::ObjectNotFound {
                oid: object_id.clone(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Count the objects currently stored.
    ///
    /// Only entries named by a full hex digest are counted, so a stray
    /// temp file from an interrupted write does not skew the number.
    pub fn object_count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let count = std::fs::read_dir(&self.path)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                ObjectId::try_parse(entry.file_name().to_string_lossy().into_owned()).is_ok()
            })
            .count();

        Ok(count)
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> Result<()> {
        let temp_object_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)?;

        file.write_all(&object_content)?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
