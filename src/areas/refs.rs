//! Branch references and HEAD
//!
//! Branch records live as plain-text files under `.gitlet/refs/<name>`; the
//! single HEAD file holds the name of the active branch. Every mutation is
//! a full rewrite of the affected file, taken under an exclusive advisory
//! lock.

use crate::artifacts::branch::branch_record::Branch;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the HEAD file
const HEAD_FILE: &str = "HEAD";

/// Name of the refs directory
const REFS_DIR: &str = "refs";

/// Branch reference manager
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    pub fn refs_path(&self) -> PathBuf {
        self.path.join(REFS_DIR)
    }

    fn branch_path(&self, name: &str) -> PathBuf {
        self.refs_path().join(name)
    }

    /// Read the name of the active branch from HEAD
    pub fn read_head(&self) -> anyhow::Result<String> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("Unable to read HEAD at {}", head_path.display()))?;

        Ok(content.trim().to_string())
    }

    /// Point HEAD at a branch
    pub fn set_head(&self, branch_name: &str) -> anyhow::Result<()> {
        self.write_locked(&self.head_path(), branch_name)
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.branch_path(name).is_file()
    }

    /// Persist a branch record, replacing any previous contents
    pub fn save_branch(&self, branch: &Branch) -> anyhow::Result<()> {
        self.write_locked(&self.branch_path(branch.name()), &branch.encode())
    }

    /// Load a branch record by name
    pub fn load_branch(&self, name: &str) -> anyhow::Result<Branch> {
        let branch_path = self.branch_path(name);
        let content = std::fs::read_to_string(&branch_path).with_context(|| {
            format!("Unable to read branch record {}", branch_path.display())
        })?;

        Branch::decode(&content)
    }

    /// Delete a branch's pointer; its commits stay in the object store
    pub fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        let branch_path = self.branch_path(name);

        std::fs::remove_file(&branch_path).with_context(|| {
            format!("Unable to delete branch record {}", branch_path.display())
        })
    }

    /// Names of all branches, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let mut names = WalkDir::new(self.refs_path())
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

    fn write_locked(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(content.as_bytes())?;

        Ok(())
    }
}
