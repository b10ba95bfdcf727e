//! Blob object
//!
//! Blobs store file content at the moment it was staged. The serialized
//! form is the raw content itself, byte-for-byte: no header, no metadata,
//! no compression. A blob's identity is the hash of its bytes, so staging
//! identical content twice produces the same object.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::errors::Result;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// Blob object representing file content
///
/// Immutable once stored; each unique byte sequence is stored exactly once,
/// identified by its SHA-1 hash.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Raw file content
    content: Bytes,
}

impl Blob {
    /// Get the raw content bytes
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        let content = reader
            .bytes()
            .collect::<std::result::Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(content.into()))
    }
}

impl Object for Blob {}
