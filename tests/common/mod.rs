#![allow(dead_code)]

use minigit::areas::repository::Repository;
use minigit::commands::porcelain::init::InitOutcome;
use std::path::Path;

/// Open a repository handle over the given directory, discarding output.
pub fn open_repository(dir: &Path) -> Repository {
    Repository::new(&dir.to_string_lossy(), Box::new(std::io::sink()))
        .expect("Failed to open repository")
}

/// Open and initialize a repository over the given directory.
pub fn open_initialized_repository(dir: &Path) -> Repository {
    let mut repository = open_repository(dir);
    let outcome = repository.init().expect("Failed to initialize repository");
    assert_eq!(outcome, InitOutcome::Created);
    repository
}
