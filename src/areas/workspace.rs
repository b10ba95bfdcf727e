//! Working directory file access
//!
//! The workspace resolves the logical paths handed to `add` against the
//! directory the repository was opened in and reads their byte content.

use crate::errors::{Error, Result};
use bytes::Bytes;
use std::path::Path;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full byte content of a workspace file.
    ///
    /// Returns `FileNotFound` (carrying the logical path) if the file does
    /// not exist at call time, before anything is read or written.
    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let full_path = self.path.join(file_path);

        if !full_path.is_file() {
            return Err(Error::FileNotFound {
                path: file_path.to_path_buf(),
            });
        }

        Ok(std::fs::read(full_path)?.into())
    }
}
