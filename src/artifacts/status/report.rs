//! Status report assembly
//!
//! Builds the five sections `status` prints: branches, staged files,
//! removed files, modifications not staged for commit, and untracked
//! files. Collection compares the working directory, the staging
//! directory, the branch's removal stage and the head commit's tracked
//! set; rendering reproduces the section layout byte for byte.

use crate::areas::repository::Repository;
use anyhow::Result;

/// How an unstaged modification is labelled
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UnstagedKind {
    Modified,
    Deleted,
}

impl UnstagedKind {
    fn label(&self) -> &'static str {
        match self {
            UnstagedKind::Modified => "modified",
            UnstagedKind::Deleted => "deleted",
        }
    }
}

/// The collected contents of the five status sections
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StatusReport {
    pub branches: Vec<String>,
    pub active_branch: String,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub unstaged: Vec<(String, UnstagedKind)>,
    pub untracked: Vec<String>,
}

impl StatusReport {
    /// Gather every section from the repository's current state
    pub fn collect(repository: &Repository) -> Result<Self> {
        let tracked = repository.head_commit()?.tracked().clone();
        let branch = repository.current_branch();
        let staging = repository.staging();
        let workspace = repository.workspace();

        let mut unstaged = Vec::new();

        // Working files that differ from their tracked or staged version
        for name in workspace.list_files()? {
            let staged = staging.contains(&name);
            let working_fingerprint = workspace.fingerprint_of(&name)?;

            let edited_after_commit = !staged
                && tracked
                    .fingerprint_of(&name)
                    .map(|fingerprint| *fingerprint != working_fingerprint)
                    .unwrap_or(false);
            let edited_after_staging =
                staged && staging.fingerprint_of(&name)? != working_fingerprint;

            if edited_after_commit || edited_after_staging {
                unstaged.push((name, UnstagedKind::Modified));
            }
        }

        // Staged files that vanished from the working directory
        for name in staging.list()? {
            if !workspace.contains(&name) {
                unstaged.push((name, UnstagedKind::Deleted));
            }
        }

        // Tracked files that vanished without being staged for removal
        for name in tracked.names() {
            if !branch.is_removal_staged(name)
                && !workspace.contains(name)
                && !staging.contains(name)
            {
                unstaged.push((name.clone(), UnstagedKind::Deleted));
            }
        }

        Ok(StatusReport {
            branches: repository.refs().list_branches()?,
            active_branch: branch.name().to_string(),
            staged: staging.list()?,
            removed: branch.removal_stage().iter().cloned().collect(),
            unstaged,
            untracked: repository.untracked_files()?,
        })
    }

    /// Render the five sections, active branch starred
    pub fn render(&self) -> String {
        let mut output = String::from("=== Branches ===\n");
        for branch in &self.branches {
            if *branch == self.active_branch {
                output.push('*');
            }
            output.push_str(branch);
            output.push('\n');
        }

        output.push_str("\n=== Staged Files ===\n");
        for name in &self.staged {
            output.push_str(name);
            output.push('\n');
        }

        output.push_str("\n=== Removed Files ===\n");
        for name in &self.removed {
            output.push_str(name);
            output.push('\n');
        }

        output.push_str("\n=== Modifications Not Staged For Commit ===\n");
        for (name, kind) in &self.unstaged {
            output.push_str(&format!("{} ({})\n", name, kind.label()));
        }

        output.push_str("\n=== Untracked Files ===\n");
        for name in &self.untracked {
            output.push_str(name);
            output.push('\n');
        }

        output.push('\n');
        output
    }
}
