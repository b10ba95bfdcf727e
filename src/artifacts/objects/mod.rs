//! Object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. Two types
//! exist:
//!
//! - **Blob**: file content, stored verbatim (raw bytes, no header)
//! - **Commit**: a snapshot record `{message, files}` stored as canonical JSON
//!
//! Both implement serialization; an object's id is the hash of its
//! serialized form.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
