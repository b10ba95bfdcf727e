//! Error kinds for repository operations
//!
//! Every public operation returns one of these variants instead of
//! terminating the process, so callers can branch on the condition
//! (retry policy, if any, belongs to them).

use crate::artifacts::objects::object_id::ObjectId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `add` targeted a path that does not exist in the workspace.
    /// Nothing has been written when this is returned.
    #[error("file {} does not exist", .path.display())]
    FileNotFound { path: PathBuf },

    /// A load referenced an object id that was never stored.
    #[error("object {oid} does not exist in the object database")]
    ObjectNotFound { oid: ObjectId },

    /// `commit` was invoked with no staged changes; no object was created.
    #[error("no staged changes to commit")]
    EmptyCommit,

    /// A string that is not a 40-character lowercase hex digest.
    #[error("invalid object id: {id}")]
    InvalidObjectId { id: String },

    /// The index file exists but does not parse as an index document.
    #[error("malformed index file {}", .path.display())]
    MalformedIndex {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A commit document failed to serialize or deserialize.
    #[error("malformed commit object")]
    MalformedCommit(#[source] serde_json::Error),

    /// Underlying filesystem failure (permissions, disk full, ...).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
