//! Content-addressed object store
//!
//! The store keeps every file blob and commit record ever created, keyed by
//! fingerprint. The first two hex characters select one of 256 bucket
//! directories; the remaining 38 start the filename. All buckets are
//! created up front by `init`, so writes never have to create directories
//! and `commit` can *move* staged files into place.
//!
//! ## Storage Format
//!
//! - Blobs: exact byte copies of the source file, stored as
//!   `<bucket>/<remainder><original-name>`. The appended name keeps blob
//!   filenames longer than 38 characters.
//! - Commit records: serialized bytes stored as `<bucket>/<remainder>`,
//!   exactly 38 characters. The length is the discriminator between the
//!   two kinds sharing a bucket.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{COMMIT_RECORD_NAME_LENGTH, FINGERPRINT_LENGTH};
use crate::artifacts::objects::tracked::TrackedEntry;
use anyhow::Context;
use derive_new::new;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Outcome of resolving a commit-id prefix
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PrefixLookup {
    /// No commit record matches the prefix
    Missing,
    /// More than one commit record matches the prefix
    Ambiguous,
    /// Exactly one commit record matches
    Found(ObjectId),
}

/// Content-addressed store on the filesystem
#[derive(Debug, new)]
pub struct ObjectStore {
    /// Path to the objects directory (typically `.gitlet/objects`)
    path: Box<Path>,
}

impl ObjectStore {
    /// Create the objects directory and all 256 buckets
    pub fn create_buckets(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.path.as_ref())
            .context("Unable to create objects directory")?;

        for bucket in 0..=255u8 {
            let bucket_path = self.path.join(format!("{:02x}", bucket));
            std::fs::create_dir(&bucket_path).with_context(|| {
                format!("Unable to create bucket directory {}", bucket_path.display())
            })?;
        }

        Ok(())
    }

    /// The path a tracked entry's blob is stored at
    pub fn blob_path(&self, entry: &TrackedEntry) -> PathBuf {
        self.path
            .join(entry.fingerprint.bucket())
            .join(entry.storage_name())
    }

    /// Fingerprint the file at `source` and file it into its bucket
    ///
    /// The stored object is an exact byte copy of the source; overwriting
    /// an existing blob is permitted since contents are identical. With
    /// `move_source` the file is renamed into place instead of copied,
    /// which is how commits drain the staging directory.
    pub fn import_blob(
        &self,
        source: &Path,
        name: &str,
        move_source: bool,
    ) -> anyhow::Result<ObjectId> {
        let content = std::fs::read_to_string(source)
            .with_context(|| format!("Unable to read file {}", source.display()))?;
        let fingerprint = Blob::new(content).fingerprint()?;

        let entry = TrackedEntry::new(fingerprint.clone(), name.to_string());
        let target = self.blob_path(&entry);

        if move_source {
            std::fs::rename(source, &target).with_context(|| {
                format!("Unable to move blob into object store at {}", target.display())
            })?;
        } else {
            std::fs::copy(source, &target).with_context(|| {
                format!("Unable to copy blob into object store at {}", target.display())
            })?;
        }

        Ok(fingerprint)
    }

    /// Read a tracked entry's blob contents
    pub fn read_blob(&self, entry: &TrackedEntry) -> anyhow::Result<String> {
        let blob_path = self.blob_path(entry);

        std::fs::read_to_string(&blob_path)
            .with_context(|| format!("Unable to read blob {}", blob_path.display()))
    }

    /// Copy a tracked entry's blob to `target`, overwriting it
    pub fn export_blob(&self, entry: &TrackedEntry, target: &Path) -> anyhow::Result<()> {
        let blob_path = self.blob_path(entry);

        std::fs::copy(&blob_path, target)
            .with_context(|| format!("Unable to restore blob {}", blob_path.display()))?;

        Ok(())
    }

    /// Serialize, fingerprint and store a commit record
    ///
    /// The record is written through a temporary file and renamed into
    /// place, so a partially written record is never visible under its
    /// final name.
    pub fn store_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let fingerprint = commit.fingerprint()?;
        let record_path = self.path.join(fingerprint.to_record_path());
        let temp_path = self
            .path
            .join(fingerprint.bucket())
            .join(format!("tmp-{}", fingerprint.remainder()));

        let content = commit.serialize()?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("Unable to open record file {}", temp_path.display()))?;
        file.write_all(&content)
            .with_context(|| format!("Unable to write record file {}", temp_path.display()))?;

        std::fs::rename(&temp_path, &record_path).with_context(|| {
            format!("Unable to rename record file to {}", record_path.display())
        })?;

        Ok(fingerprint)
    }

    /// Load a commit record by its full fingerprint
    pub fn load_commit(&self, fingerprint: &ObjectId) -> anyhow::Result<Commit> {
        let record_path = self.path.join(fingerprint.to_record_path());

        let content = std::fs::read(&record_path).with_context(|| {
            format!("Unable to read commit record {}", record_path.display())
        })?;

        let mut reader = Cursor::new(content);
        Self::consume_record_header(&mut reader, &record_path)?;

        Commit::deserialize(reader)
    }

    /// Resolve a commit-id prefix to a full fingerprint
    ///
    /// Accepts any prefix of length >= 2: the first two characters select
    /// the bucket, the remainder is matched against every commit record in
    /// it (records are the bucket files whose name is exactly 38
    /// characters). More than one match is reported as ambiguous.
    pub fn find_commit(&self, prefix: &str) -> anyhow::Result<PrefixLookup> {
        if prefix.len() < 2
            || prefix.len() > FINGERPRINT_LENGTH
            || !prefix.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Ok(PrefixLookup::Missing);
        }

        let bucket = &prefix[..2];
        let remainder_prefix = &prefix[2..];
        let bucket_path = self.path.join(bucket);

        if !bucket_path.is_dir() {
            return Ok(PrefixLookup::Missing);
        }

        let mut matched = Vec::new();
        for dir_entry in std::fs::read_dir(&bucket_path)
            .with_context(|| format!("Unable to read bucket {}", bucket_path.display()))?
        {
            let file_name = dir_entry?.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.len() == COMMIT_RECORD_NAME_LENGTH
                && file_name.starts_with(remainder_prefix)
            {
                matched.push(ObjectId::try_parse(format!("{}{}", bucket, file_name))?);
            }
        }

        match matched.len() {
            0 => Ok(PrefixLookup::Missing),
            1 => Ok(PrefixLookup::Found(matched.remove(0))),
            _ => Ok(PrefixLookup::Ambiguous),
        }
    }

    fn consume_record_header(
        reader: &mut Cursor<Vec<u8>>,
        record_path: &Path,
    ) -> anyhow::Result<()> {
        let mut header = Vec::new();
        let mut byte = [0u8; 1];

        loop {
            reader.read_exact(&mut byte).with_context(|| {
                format!("Truncated commit record {}", record_path.display())
            })?;
            if byte[0] == 0 {
                break;
            }
            header.push(byte[0]);
        }

        let header = String::from_utf8(header)?;
        if !header.starts_with("commit ") {
            anyhow::bail!(
                "Object at {} is not a commit record",
                record_path.display()
            );
        }

        Ok(())
    }
}
