//! Command implementations
//!
//! Each operation lives in its own file as an `impl Repository` block,
//! split into two categories:
//!
//! - `plumbing`: low-level object access (cat-file)
//! - `porcelain`: user-facing version control operations (init, add, commit)

pub mod plumbing;
pub mod porcelain;
