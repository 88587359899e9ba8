use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use std::io::Write;

impl Repository {
    /// Restore a file from the current branch's tip
    pub fn checkout_file_from_head(&mut self, name: &str) -> anyhow::Result<()> {
        let commit = self.head_commit()?;
        self.checkout_file(&commit, name)
    }

    /// Restore a file from the commit named by a fingerprint prefix
    pub fn checkout_file_from_commit(&mut self, prefix: &str, name: &str) -> anyhow::Result<()> {
        let Some(commit) = self.resolve_commit(prefix)? else {
            return Ok(());
        };

        self.checkout_file(&commit, name)
    }

    /// Switch the active branch and materialize its tip
    ///
    /// Validation order matters: same-branch, then missing-branch, then the
    /// untracked-file safety check. Only then is HEAD repointed and the
    /// working directory rebuilt.
    pub fn checkout_branch(&mut self, name: &str) -> anyhow::Result<()> {
        if name == self.current_branch().name() {
            writeln!(self.writer(), "No need to checkout the current branch.")?;
            return Ok(());
        }

        if !self.refs().branch_exists(name) {
            writeln!(self.writer(), "No such branch exists.")?;
            return Ok(());
        }

        if !self.ensure_no_untracked()? {
            return Ok(());
        }

        let target = self.refs().load_branch(name)?;
        self.refs().set_head(name)?;

        let tip_commit = self.store().load_commit(target.tip())?;
        self.materialize(&tip_commit)?;
        self.set_active_branch(target);

        Ok(())
    }

    /// Copy a commit's version of a file into the workspace, overwriting
    pub(crate) fn checkout_file(&self, commit: &Commit, name: &str) -> anyhow::Result<()> {
        match commit.tracked().entry_for(name) {
            Some(entry) => self
                .store()
                .export_blob(&entry, &self.workspace().file_path(name)),
            None => {
                writeln!(self.writer(), "File does not exist in that commit.")?;
                Ok(())
            }
        }
    }
}
