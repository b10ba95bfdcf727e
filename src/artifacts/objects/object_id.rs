//! Object identifier (SHA-1 hash)
//!
//! Object ids are 40-character hexadecimal strings. They uniquely identify
//! all stored objects (blobs and commits) and double as the object's file
//! name inside the `objects` directory.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc123")

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Object identifier (SHA-1 hash)
///
/// A 40-character hexadecimal string that uniquely identifies an object.
/// Byte-identical content always hashes to the same id, so the id is also
/// the deduplication key of the object database.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or `InvalidObjectId` on wrong length/characters
    pub fn try_parse(id: String) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidObjectId { id });
        }
        Ok(Self(id))
    }

    /// Hash a byte sequence into its object ID
    ///
    /// Pure and infallible: identical bytes always produce the same id,
    /// and every finite input (including the empty sequence) has one.
    pub fn from_content(data: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(data);

        Self(format!("{:x}", hasher.finalize()))
    }

    /// Convert to the file name used inside the objects directory
    ///
    /// The store is flat: the full lowercase digest is the file name,
    /// no prefix sharding.
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl TryFrom<String> for ObjectId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::try_parse(value)
    }
}

impl From<ObjectId> for String {
    fn from(oid: ObjectId) -> Self {
        oid.0
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use rstest::rstest;

    #[rstest]
    fn test_hashing_is_deterministic() {
        let first = ObjectId::from_content(b"some tracked content");
        let second = ObjectId::from_content(b"some tracked content");

        pretty_assertions::assert_eq!(first, second);
    }

    #[rstest]
    fn test_empty_content_hashes_to_known_digest() {
        let oid = ObjectId::from_content(b"");

        pretty_assertions::assert_eq!(oid.as_ref(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[rstest]
    fn test_distinct_content_hashes_differently() {
        let first = ObjectId::from_content(b"a");
        let second = ObjectId::from_content(b"b");

        assert_ne!(first, second);
    }

    #[rstest]
    #[case("abc123")]
    #[case("zz39a3ee5e6b4b0d3255bfef95601890afd80709")]
    fn test_try_parse_rejects_malformed_ids(#[case] id: &str) {
        let result = ObjectId::try_parse(id.to_string());

        assert!(matches!(result, Err(Error::InvalidObjectId { .. })));
    }

    #[rstest]
    fn test_try_parse_round_trips_valid_digest() {
        let digest = ObjectId::from_content(b"round trip").to_string();

        let parsed = ObjectId::try_parse(digest.clone()).unwrap();
        pretty_assertions::assert_eq!(parsed.to_string(), digest);
    }

    #[rstest]
    fn test_short_oid_is_seven_characters() {
        let oid = ObjectId::from_content(b"abbreviated");

        pretty_assertions::assert_eq!(oid.to_short_oid(), oid.as_ref()[..7].to_string());
    }
}
