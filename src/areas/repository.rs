//! Repository handle
//!
//! Ties the workspace, object database, and index together under one root.
//! Opening a repository derives paths only; nothing is created on disk
//! until `init` runs. The handle is meant to be exclusively owned by a
//! single caller — no provision is made for two actors mutating the same
//! root concurrently.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::workspace::Workspace;
use crate::errors::Result;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the repository directory created under the workdir
pub const REPOSITORY_DIR: &str = ".minigit";

pub struct Repository {
    path: Box<Path>,
    root: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Index,
    database: Database,
    workspace: Workspace,
}

impl Repository {
    /// Open a repository handle over the given working directory.
    ///
    /// The workdir is created if absent; the repository root
    /// (`<workdir>/.minigit`) is left untouched until `init`.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let path = Path::new(path);
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let root = path.join(REPOSITORY_DIR);

        let index = Index::new(root.join("index").into_boxed_path());
        let database = Database::new(root.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            root: root.into_boxed_path(),
            writer: RefCell::new(writer),
            index,
            database,
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the repository root (`<workdir>/.minigit`)
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether the root directory exists, i.e. `init` has run here before
    pub fn is_initialized(&self) -> bool {
        self.root.exists()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
