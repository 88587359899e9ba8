//! Staging area for additions
//!
//! Files staged for the next commit are kept as exact byte copies, one per
//! staged filename, inside `.gitlet/staging`. Committing drains this
//! directory by moving the copies into the object store. Removals are
//! staged separately, on the branch record.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// On-disk buffer of files staged for addition
#[derive(Debug, new)]
pub struct Staging {
    path: Box<Path>,
}

impl Staging {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.list()?.is_empty())
    }

    /// Names of all staged files, sorted
    pub fn list(&self) -> anyhow::Result<Vec<String>> {
        let mut names = WalkDir::new(self.path.as_ref())
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect::<Vec<_>>();

        names.sort();
        Ok(names)
    }

    /// Copy a workspace file into staging, replacing any prior version
    pub fn stage(&self, source: &Path, name: &str) -> anyhow::Result<()> {
        let target = self.file_path(name);

        std::fs::copy(source, &target)
            .with_context(|| format!("Unable to stage file {}", target.display()))?;

        Ok(())
    }

    /// Remove a staged copy; true if one existed
    pub fn unstage(&self, name: &str) -> anyhow::Result<bool> {
        let staged_path = self.file_path(name);

        if staged_path.is_file() {
            std::fs::remove_file(&staged_path).with_context(|| {
                format!("Unable to unstage file {}", staged_path.display())
            })?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Delete every staged copy
    pub fn clear(&self) -> anyhow::Result<()> {
        for name in self.list()? {
            self.unstage(&name)?;
        }

        Ok(())
    }

    /// Fingerprint a staged file's contents
    pub fn fingerprint_of(&self, name: &str) -> anyhow::Result<ObjectId> {
        let staged_path = self.file_path(name);
        let content = std::fs::read_to_string(&staged_path).with_context(|| {
            format!("Unable to read staged file {}", staged_path.display())
        })?;

        Blob::new(content).fingerprint()
    }
}
