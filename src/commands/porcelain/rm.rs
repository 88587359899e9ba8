use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Un-stage a pending addition and, if the head commit tracks the file,
    /// stage its removal and delete it from the workspace
    pub fn rm(&mut self, name: &str) -> anyhow::Result<()> {
        let addition_unstaged = self.staging().unstage(name)?;

        let tracked = self.head_commit()?.tracked().contains_name(name);
        if tracked {
            self.current_branch_mut().stage_removal(name);
            self.persist_branch()?;
            self.workspace().remove_file(name)?;
        }

        if !addition_unstaged && !tracked {
            writeln!(self.writer(), "No reason to remove the file.")?;
        }

        Ok(())
    }
}
