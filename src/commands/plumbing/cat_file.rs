use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    /// Print the verbatim content of a stored object to the writer.
    ///
    /// Works for both blobs (raw file bytes) and commits (their canonical
    /// JSON document). Fails with `InvalidObjectId` for malformed input
    /// and `ObjectNotFound` for an id that was never stored.
    pub fn cat_file(&self, sha: &str) -> Result<()> {
        let object_id = ObjectId::try_parse(sha.to_string())?;
        let content = self.database().load(&object_id)?;

        self.writer().write_all(&content)?;

        Ok(())
    }
}
