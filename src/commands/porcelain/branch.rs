use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_record::Branch;
use std::io::Write;

impl Repository {
    /// Create a new branch pointer at the current tip
    ///
    /// HEAD and the active branch are left untouched; the new branch starts
    /// with an empty removal stage.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        if self.refs().branch_exists(name) {
            writeln!(self.writer(), "A branch with that name already exists.")?;
            return Ok(());
        }

        let tip = self.current_branch().tip().clone();
        self.refs().save_branch(&Branch::new(name.to_string(), tip))?;

        Ok(())
    }

    /// Delete a branch's pointer; its commits stay reachable in the store
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        if name == self.current_branch().name() {
            writeln!(self.writer(), "Cannot remove the current branch.")?;
            return Ok(());
        }

        if !self.refs().branch_exists(name) {
            writeln!(self.writer(), "A branch with that name does not exist.")?;
            return Ok(());
        }

        self.refs().delete_branch(name)
    }
}
