//! Object identifier (content fingerprint)
//!
//! Fingerprints are 40-character lowercase hexadecimal strings identifying
//! every stored record: file blobs and commits alike.
//!
//! ## Storage
//!
//! Records are stored in `.gitlet/objects/<first-2-chars>/<remaining-38>`;
//! blob filenames additionally carry the tracked filename appended.

use crate::artifacts::objects::FINGERPRINT_LENGTH;
use std::path::PathBuf;

/// Content fingerprint of a stored record
///
/// A 40-character hexadecimal string that uniquely identifies a blob or
/// commit. Commit equality is fingerprint equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate a fingerprint from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != FINGERPRINT_LENGTH {
            return Err(anyhow::anyhow!("Invalid fingerprint length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid fingerprint characters: {}", id));
        }
        Ok(Self(id))
    }

    /// The bucket directory selected by the first two hex characters
    pub fn bucket(&self) -> &str {
        &self.0[..2]
    }

    /// The filename remainder after the bucket characters
    pub fn remainder(&self) -> &str {
        &self.0[2..]
    }

    /// Convert to the storage path of a commit record, `XX/YYYY...`
    pub fn to_record_path(&self) -> PathBuf {
        PathBuf::from(self.bucket()).join(self.remainder())
    }

    /// Get the abbreviated form used by merge lines in the log
    pub fn to_short_id(&self) -> &str {
        &self.0[..7]
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
