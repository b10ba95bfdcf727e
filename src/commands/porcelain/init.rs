use crate::areas::repository::Repository;
use crate::errors::Result;
use std::fs;
use std::io::Write;

/// Result of an `init` call: either the repository was created now or it
/// already existed. Re-initialization is tolerated, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyInitialized,
}

impl Repository {
    /// Initialize the repository.
    ///
    /// Creates the root directory, the objects subdirectory, and an empty
    /// index file. If the root already exists this is a no-op that reports
    /// the existing state; no index entry or object is touched.
    pub fn init(&mut self) -> Result<InitOutcome> {
        if self.is_initialized() {
            write!(self.writer(), "Repository already initialized.")?;
            return Ok(InitOutcome::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())?;
        self.index_mut().write_updates()?;

        write!(
            self.writer(),
            "Initialized empty repository in {}",
            self.root().display()
        )?;

        Ok(InitOutcome::Created)
    }
}
