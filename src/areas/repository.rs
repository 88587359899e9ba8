//! Repository abstraction and coordination
//!
//! This module provides the main `Repository` type that coordinates all
//! repository operations. It acts as a facade over the lower-level
//! components (object store, staging, workspace, refs, global log) and
//! carries the active branch record, so the commit subsystem never needs a
//! process-wide singleton: every operation is parameterized by the
//! repository value it runs against.
//!
//! ## Architecture
//!
//! The repository maintains references to:
//! - ObjectStore: content-addressed storage (blobs, commit records)
//! - Staging: files staged for addition
//! - Workspace: working directory operations
//! - Refs: branch records and HEAD
//! - GlobalLog: the newest-first record of every commit

use crate::areas::global_log::GlobalLog;
use crate::areas::object_store::{ObjectStore, PrefixLookup};
use crate::areas::refs::Refs;
use crate::areas::staging::Staging;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_record::Branch;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tracked::TrackedEntry;
use std::cell::{Ref, RefCell, RefMut};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Repository directory name
pub const GITLET_DIR: &str = ".gitlet";

/// Object store directory name
pub(crate) const OBJECTS_DIR: &str = "objects";

/// Staging directory name
pub(crate) const STAGING_DIR: &str = "staging";

/// Global log file name
pub(crate) const GLOBAL_LOG_FILE: &str = "global log";

/// Branch created by `init` and named by the fresh HEAD
pub(crate) const DEFAULT_BRANCH: &str = "master";

/// Gitlet repository
///
/// Coordinates all repository operations and provides access to the object
/// store, staging, workspace, refs and global log subsystems. This is the
/// entry point for every user-visible operation.
pub struct Repository {
    /// Working directory root
    path: Box<Path>,
    /// Output writer (stdout in production, a buffer in tests)
    writer: RefCell<Box<dyn Write>>,
    /// Content-addressed object store
    store: ObjectStore,
    /// Files staged for addition
    staging: Staging,
    /// Working directory
    workspace: Workspace,
    /// Branch records and HEAD
    refs: Refs,
    /// Newest-first record of every commit
    global_log: GlobalLog,
    /// The active branch record, named by HEAD
    branch: RefCell<Branch>,
}

impl Repository {
    /// True if `path` contains an initialized repository
    pub fn exists(path: &Path) -> bool {
        path.join(GITLET_DIR).is_dir()
    }

    /// The repository directory under a workspace root
    pub fn gitlet_path(path: &Path) -> PathBuf {
        path.join(GITLET_DIR)
    }

    /// Open the repository at `path` and load the active branch
    ///
    /// Requires an initialized repository; `init` is the only operation
    /// that runs without one.
    pub fn open(path: &Path, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        let gitlet_path = Self::gitlet_path(path);

        let refs = Refs::new(gitlet_path.clone().into_boxed_path());
        let head = refs.read_head()?;
        let branch = refs.load_branch(&head)?;

        Ok(Repository {
            path: path.to_path_buf().into_boxed_path(),
            writer: RefCell::new(writer),
            store: ObjectStore::new(gitlet_path.join(OBJECTS_DIR).into_boxed_path()),
            staging: Staging::new(gitlet_path.join(STAGING_DIR).into_boxed_path()),
            workspace: Workspace::new(path.to_path_buf().into_boxed_path()),
            refs,
            global_log: GlobalLog::new(gitlet_path.join(GLOBAL_LOG_FILE).into_boxed_path()),
            branch: RefCell::new(branch),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn staging(&self) -> &Staging {
        &self.staging
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn global_log(&self) -> &GlobalLog {
        &self.global_log
    }

    pub fn current_branch(&self) -> Ref<'_, Branch> {
        self.branch.borrow()
    }

    pub fn current_branch_mut(&self) -> RefMut<'_, Branch> {
        self.branch.borrow_mut()
    }

    /// Replace the active branch record after a branch switch
    pub(crate) fn set_active_branch(&self, branch: Branch) {
        *self.branch.borrow_mut() = branch;
    }

    /// Persist the active branch record
    pub(crate) fn persist_branch(&self) -> anyhow::Result<()> {
        self.refs.save_branch(&self.branch.borrow())
    }

    /// Load the commit the active branch points at
    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        self.store.load_commit(self.branch.borrow().tip())
    }

    /// Resolve a commit-id prefix, reporting lookup failures to the user
    ///
    /// Returns None after printing the diagnostic when no commit matches or
    /// the prefix is ambiguous.
    pub(crate) fn resolve_commit(&self, prefix: &str) -> anyhow::Result<Option<Commit>> {
        match self.store.find_commit(prefix)? {
            PrefixLookup::Found(fingerprint) => Ok(Some(self.store.load_commit(&fingerprint)?)),
            PrefixLookup::Ambiguous => {
                writeln!(self.writer(), "Ambiguous commit id.")?;
                Ok(None)
            }
            PrefixLookup::Missing => {
                writeln!(self.writer(), "No commit with that id exists.")?;
                Ok(None)
            }
        }
    }

    /// Files in the workspace that are neither tracked by the head commit
    /// nor staged for addition, plus any file staged for removal
    pub fn untracked_files(&self) -> anyhow::Result<Vec<String>> {
        let tracked = self.head_commit()?.tracked().clone();
        let branch = self.branch.borrow();

        Ok(self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|name| {
                (!tracked.contains_name(name) && !self.staging.contains(name))
                    || branch.is_removal_staged(name)
            })
            .collect::<Vec<_>>())
    }

    /// The untracked-file safety check run before checkout, reset and merge
    ///
    /// Returns false after printing the diagnostic when an untracked file
    /// would be overwritten.
    pub(crate) fn ensure_no_untracked(&self) -> anyhow::Result<bool> {
        if self.untracked_files()?.is_empty() {
            return Ok(true);
        }

        writeln!(
            self.writer(),
            "There is an untracked file in the way; delete it, or add and commit it first."
        )?;
        Ok(false)
    }

    /// Reconcile the working directory with a target commit
    ///
    /// Deletes every workspace file, restores the target's tracked entries
    /// and empties the staging directory. The removal stage belongs to the
    /// branch record and is not touched here.
    pub(crate) fn materialize(&self, commit: &Commit) -> anyhow::Result<()> {
        self.workspace.clear()?;

        for entry in commit.tracked().entries() {
            self.store
                .export_blob(&entry, &self.workspace.file_path(&entry.name))?;
        }

        self.staging.clear()
    }

    /// Assemble the next commit from the parent's tracked set
    ///
    /// Staged files are moved into the object store as they are recorded;
    /// filenames staged for removal are dropped from the clone of the
    /// parent's tracked set.
    pub(crate) fn build_commit(
        &self,
        message: &str,
        parents: Vec<ObjectId>,
    ) -> anyhow::Result<Commit> {
        let mut tracked = self.head_commit()?.tracked().clone();

        for name in self.staging.list()? {
            tracked.remove(&name);
            let fingerprint =
                self.store
                    .import_blob(&self.staging.file_path(&name), &name, true)?;
            tracked.insert(TrackedEntry::new(fingerprint, name));
        }

        for name in self.branch.borrow().removal_stage().iter() {
            tracked.remove(name);
        }

        Ok(Commit::new(message.to_string(), parents, tracked))
    }

    /// Store a commit and advance the repository to it
    ///
    /// Ordering matters for crash safety: the record is written first, then
    /// the branch tip (with a cleared removal stage), then the global log.
    pub(crate) fn record_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let fingerprint = self.store.store_commit(commit)?;

        {
            let mut branch = self.branch.borrow_mut();
            branch.set_tip(fingerprint.clone());
            branch.clear_removals();
        }
        self.persist_branch()?;

        self.global_log.prepend(&commit.render()?)?;

        Ok(fingerprint)
    }
}
