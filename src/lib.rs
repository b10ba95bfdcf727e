//! A minimal version-control core: a content-addressable object database,
//! a persisted staging area (index), and parentless commit snapshots.
//!
//! The repository lives in a `.minigit` directory under the working
//! directory. Blobs are stored verbatim under their SHA-1 hex digest;
//! commits are canonical JSON documents stored the same way.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
