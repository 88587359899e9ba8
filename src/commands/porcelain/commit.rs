use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Record staged additions and removals as a new commit
    pub fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        let nothing_staged =
            self.staging().is_empty()? && !self.current_branch().has_removals();
        if nothing_staged {
            writeln!(self.writer(), "No changes added to the commit.")?;
            return Ok(());
        }

        if message.is_empty() {
            writeln!(self.writer(), "Please enter a commit message.")?;
            return Ok(());
        }

        let parent = self.current_branch().tip().clone();
        let commit = self.build_commit(message, vec![parent])?;
        self.record_commit(&commit)?;

        Ok(())
    }
}
