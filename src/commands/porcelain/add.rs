use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::errors::Result;
use std::path::Path;

impl Repository {
    /// Stage a file for the next commit.
    ///
    /// Reads the file's bytes, stores them as a blob, and records the
    /// path → id entry in the index. Fails with `FileNotFound` before any
    /// mutation if the file does not exist. Re-adding unchanged content is
    /// a no-op at the storage layer (content addressing) but still rewrites
    /// the index entry with the same value.
    pub fn add(&mut self, path: &str) -> Result<()> {
        let data = self.workspace().read_file(Path::new(path))?;

        let blob = Blob::new(data);
        let blob_id = self.database().store(blob)?;

        self.index_mut().stage(path.to_string(), blob_id)?;

        Ok(())
    }
}
