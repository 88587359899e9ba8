//! Global commit log
//!
//! An append-prepended textual record of every commit ever created in the
//! repository, newest first. `global-log` prints it verbatim, and `find`
//! enumerates commits through it instead of scanning the object store.

use anyhow::Context;
use derive_new::new;
use regex::Regex;
use std::path::Path;

/// Pattern extracting the fingerprint line of each rendered entry
const COMMIT_LINE_PATTERN: &str = "commit (.+)";

/// The newest-first record of all commits
#[derive(Debug, new)]
pub struct GlobalLog {
    /// Path to the log file (typically `.gitlet/global log`)
    path: Box<Path>,
}

impl GlobalLog {
    /// Write the first entry, replacing whatever was there
    pub fn initialize(&self, entry: &str) -> anyhow::Result<()> {
        std::fs::write(self.path.as_ref(), entry)
            .with_context(|| format!("Unable to write global log {}", self.path.display()))
    }

    /// Prepend a rendered commit entry
    pub fn prepend(&self, entry: &str) -> anyhow::Result<()> {
        let existing = self.read()?;
        let updated = format!("{}\n{}", entry, existing);

        std::fs::write(self.path.as_ref(), updated)
            .with_context(|| format!("Unable to update global log {}", self.path.display()))
    }

    /// The log contents, verbatim
    pub fn read(&self) -> anyhow::Result<String> {
        std::fs::read_to_string(self.path.as_ref())
            .with_context(|| format!("Unable to read global log {}", self.path.display()))
    }

    /// Fingerprints of every commit ever created, newest first
    pub fn commit_ids(&self) -> anyhow::Result<Vec<String>> {
        let content = self.read()?;
        let pattern = Regex::new(COMMIT_LINE_PATTERN)?;

        Ok(content
            .lines()
            .filter_map(|line| pattern.captures(line))
            .map(|captures| captures[1].to_string())
            .collect::<Vec<_>>())
    }
}
