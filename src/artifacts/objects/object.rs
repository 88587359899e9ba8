//! Core object traits
//!
//! This module defines the fundamental traits implemented by the stored
//! record types (blobs and commits):
//! - `Packable`: serialization to the on-wire byte format
//! - `Unpackable`: deserialization from the on-wire byte format
//! - `Object`: common operations (fingerprint computation)
//!
//! ## Object Format
//!
//! Serialized objects carry a header followed by their content:
//! ```text
//! <type> <size>\0<content>
//! ```
//! The fingerprint of an object is the SHA-1 of this byte sequence, so two
//! logically equal records always share an identity.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Trait for serializing records to their storage format
pub trait Packable {
    /// Serialize the record to bytes (including header)
    fn serialize(&self) -> Result<Bytes>;
}

/// Trait for deserializing records from their storage format
pub trait Unpackable {
    /// Deserialize the record from a reader (header already consumed)
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Core stored-record trait
///
/// Provides fingerprint computation over the serialized form. Changing any
/// field of a record therefore changes its identity.
pub trait Object: Packable {
    /// Compute the record's fingerprint (SHA-1 over the serialized bytes)
    fn fingerprint(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let fingerprint = hasher.finalize();
        ObjectId::try_parse(format!("{fingerprint:x}"))
    }
}
