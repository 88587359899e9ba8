//! Working directory view
//!
//! Only regular files at the top of the working directory are tracked; the
//! `.gitlet` directory (and any other directory) is never listed. All paths
//! handed out and accepted here are bare filenames relative to the
//! workspace root.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const REPOSITORY_DIR: &str = ".gitlet";

/// The user's working directory
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.file_path(name).is_file()
    }

    /// List the names of all regular files at the top of the workspace,
    /// sorted
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        let mut names = WalkDir::new(self.path.as_ref())
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().to_string();
                if name == REPOSITORY_DIR {
                    None
                } else {
                    Some(name)
                }
            })
            .collect::<Vec<_>>();

        names.sort();
        Ok(names)
    }

    pub fn read_file(&self, name: &str) -> anyhow::Result<String> {
        let file_path = self.file_path(name);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("Unable to read workspace file {}", file_path.display()))
    }

    pub fn write_file(&self, name: &str, content: &str) -> anyhow::Result<()> {
        let file_path = self.file_path(name);

        std::fs::write(&file_path, content)
            .with_context(|| format!("Unable to write workspace file {}", file_path.display()))
    }

    /// Delete a workspace file if it exists
    pub fn remove_file(&self, name: &str) -> anyhow::Result<()> {
        let file_path = self.file_path(name);

        if file_path.is_file() {
            std::fs::remove_file(&file_path).with_context(|| {
                format!("Unable to remove workspace file {}", file_path.display())
            })?;
        }

        Ok(())
    }

    /// Delete every regular file at the top of the workspace
    pub fn clear(&self) -> anyhow::Result<()> {
        for name in self.list_files()? {
            self.remove_file(&name)?;
        }

        Ok(())
    }

    /// Fingerprint a workspace file's current contents
    pub fn fingerprint_of(&self, name: &str) -> anyhow::Result<ObjectId> {
        let content = self.read_file(name)?;
        Blob::new(content).fingerprint()
    }
}
