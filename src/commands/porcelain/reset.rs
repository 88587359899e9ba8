use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;

impl Repository {
    /// Move the current branch's tip to a commit and materialize it
    pub fn reset(&mut self, prefix: &str) -> anyhow::Result<()> {
        if !self.ensure_no_untracked()? {
            return Ok(());
        }

        let Some(commit) = self.resolve_commit(prefix)? else {
            return Ok(());
        };

        let fingerprint = commit.fingerprint()?;
        self.current_branch_mut().set_tip(fingerprint);
        self.persist_branch()?;

        self.materialize(&commit)
    }
}
