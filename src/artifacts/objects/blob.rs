//! File blob
//!
//! Blobs hold the contents of a tracked file. The fingerprint of a blob is
//! computed over the header-wrapped form `blob <size>\0<content>`, but the
//! object store keeps blobs as exact byte copies of the source file so that
//! commits can move staged files into place and checkout can copy them back
//! without any re-encoding.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;
use std::io::Write;

/// File contents staged or tracked by a commit
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Blob {
    /// File content as a string
    content: String,
}

impl Blob {
    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let content_bytes = self.content.as_bytes();

        let mut blob_bytes = Vec::new();
        let header = format!("blob {}\0", content_bytes.len());
        blob_bytes.write_all(header.as_bytes())?;
        blob_bytes.write_all(content_bytes)?;

        Ok(Bytes::from(blob_bytes))
    }
}

impl Object for Blob {}
