//! Commit object
//!
//! A commit is a standalone, parentless snapshot record: a message paired
//! with the full path→id mapping captured from the index. It is not a delta
//! and carries no reference to any previous commit.
//!
//! ## Canonical format
//!
//! On disk a commit is a JSON document:
//!
//! ```text
//! {"message":"<message>","files":{"<path>":"<hex-digest>",...}}
//! ```
//!
//! The encoding is pinned forever: UTF-8, `message` before `files`, file
//! paths sorted (the mapping is a `BTreeMap`), compact separators with no
//! added whitespace. The commit's id is the hash of exactly these bytes,
//! so any change to the encoding would change every commit hash.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::BufRead;

/// Commit object
///
/// An immutable snapshot of the staging area annotated with a message.
/// Two commits with the same message and the same files mapping serialize
/// to identical bytes and therefore share one object id.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, new)]
pub struct Commit {
    /// Commit message
    message: String,
    /// Snapshot of the index: path → content id
    files: BTreeMap<String, ObjectId>,
}

impl Commit {
    /// Get the first line of the commit message
    ///
    /// Useful for short-form display
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the captured path → content id mapping
    pub fn files(&self) -> &BTreeMap<String, ObjectId> {
        &self.files
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        let content = serde_json::to_vec(self).map_err(Error::MalformedCommit)?;

        Ok(Bytes::from(content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        serde_json::from_reader(reader).map_err(Error::MalformedCommit)
    }
}

impl Object for Commit {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::io::Cursor;

    #[fixture]
    fn files() -> Vec<(String, ObjectId)> {
        vec![
            ("b.txt".to_string(), ObjectId::from_content(b"second")),
            ("a.txt".to_string(), ObjectId::from_content(b"first")),
        ]
    }

    #[rstest]
    fn test_serialized_form_is_canonical(files: Vec<(String, ObjectId)>) {
        let reversed = files.iter().rev().cloned().collect::<BTreeMap<_, _>>();
        let commit = Commit::new("msg".to_string(), files.into_iter().collect());
        let equivalent = Commit::new("msg".to_string(), reversed);

        // insertion order must not leak into the serialized bytes
        pretty_assertions::assert_eq!(
            Packable::serialize(&commit).unwrap(),
            Packable::serialize(&equivalent).unwrap()
        );
        pretty_assertions::assert_eq!(
            commit.object_id().unwrap(),
            equivalent.object_id().unwrap()
        );
    }

    #[rstest]
    fn test_serialized_keys_are_sorted(files: Vec<(String, ObjectId)>) {
        let commit = Commit::new("msg".to_string(), files.into_iter().collect());

        let serialized = Packable::serialize(&commit).unwrap();
        let serialized = String::from_utf8(serialized.to_vec()).unwrap();
        assert!(serialized.find("a.txt").unwrap() < serialized.find("b.txt").unwrap());
        assert!(serialized.starts_with(r#"{"message":"#));
    }

    #[rstest]
    fn test_deserialize_round_trips(files: Vec<(String, ObjectId)>) {
        let commit = Commit::new("a message\nwith details".to_string(), files.into_iter().collect());

        let serialized = Packable::serialize(&commit).unwrap();
        let deserialized = <Commit as Unpackable>::deserialize(Cursor::new(serialized)).unwrap();

        pretty_assertions::assert_eq!(deserialized, commit);
    }

    #[rstest]
    fn test_short_message_takes_first_line(files: Vec<(String, ObjectId)>) {
        let commit = Commit::new("headline\nbody".to_string(), files.into_iter().collect());

        pretty_assertions::assert_eq!(commit.short_message(), "headline");
    }

    #[rstest]
    fn test_malformed_document_is_rejected() {
        let result = <Commit as Unpackable>::deserialize(Cursor::new(b"not json".to_vec()));

        assert!(matches!(result, Err(Error::MalformedCommit(_))));
    }
}
