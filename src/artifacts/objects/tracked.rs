//! Tracked-file entries
//!
//! A commit records each tracked file as the concatenation of its blob
//! fingerprint and its original filename. That encoding makes "same name
//! with same content" a single string equality, while "same name with
//! different content" compares unequal. The set is kept as an ordered map
//! keyed by filename so commit serialization is canonical.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::FINGERPRINT_LENGTH;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;

/// A (blob fingerprint, filename) pair tracked by a commit
#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct TrackedEntry {
    pub fingerprint: ObjectId,
    pub name: String,
}

impl TrackedEntry {
    /// Parse an entry from its concatenated `<fingerprint><name>` form
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        if raw.len() <= FINGERPRINT_LENGTH {
            anyhow::bail!("Invalid tracked entry: {}", raw);
        }

        let (fingerprint, name) = raw.split_at(FINGERPRINT_LENGTH);
        let fingerprint = ObjectId::try_parse(fingerprint.to_string())
            .context("Invalid tracked entry fingerprint")?;

        Ok(Self::new(fingerprint, name.to_string()))
    }

    /// The concatenated `<fingerprint><name>` form
    pub fn encoded(&self) -> String {
        format!("{}{}", self.fingerprint, self.name)
    }

    /// The filename a blob is stored under inside its bucket
    pub fn storage_name(&self) -> String {
        format!("{}{}", self.fingerprint.remainder(), self.name)
    }
}

/// The set of files tracked by a commit, keyed by filename
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct TrackedSet {
    entries: BTreeMap<String, ObjectId>,
}

impl TrackedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: TrackedEntry) {
        self.entries.insert(entry.name, entry.fingerprint);
    }

    /// Drop the entry with the given filename, if any
    pub fn remove(&mut self, name: &str) {
        self.entries.remove(name);
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// True if the set holds this exact (fingerprint, filename) pair
    pub fn contains_entry(&self, entry: &TrackedEntry) -> bool {
        self.entries.get(&entry.name) == Some(&entry.fingerprint)
    }

    pub fn entry_for(&self, name: &str) -> Option<TrackedEntry> {
        self.entries
            .get(name)
            .map(|fingerprint| TrackedEntry::new(fingerprint.clone(), name.to_string()))
    }

    pub fn fingerprint_of(&self, name: &str) -> Option<&ObjectId> {
        self.entries.get(name)
    }

    /// Tracked filenames, in sorted order
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Tracked entries, sorted by filename
    pub fn entries(&self) -> impl Iterator<Item = TrackedEntry> + '_ {
        self.entries
            .iter()
            .map(|(name, fingerprint)| TrackedEntry::new(fingerprint.clone(), name.clone()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
