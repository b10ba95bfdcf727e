use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    /// Seal the current index into a commit object.
    ///
    /// Captures the full staged mapping together with the message,
    /// serializes it canonically, and stores it under the hash of those
    /// bytes. Returns the commit's id.
    ///
    /// Fails with `EmptyCommit` when nothing is staged; no object is
    /// created in that case.
    ///
    /// The index is left unchanged: a commit is a pure snapshot, not a
    /// transaction that clears the staging area. An immediate second
    /// commit with no intervening `add` reproduces an equivalent commit
    /// object with the same id.
    pub fn commit(&mut self, message: &str) -> Result<ObjectId> {
        self.index_mut().rehydrate()?;

        if self.index().is_empty() {
            return Err(Error::EmptyCommit);
        }

        let message = message.trim().to_string();
        let commit = Commit::new(message, self.index().snapshot());
        let commit_id = self.database().store(commit.clone())?;

        write!(
            self.writer(),
            "[{}] {}",
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
