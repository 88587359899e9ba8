use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the current branch's history, following primary parents only
    ///
    /// A merge's second parent is never followed, so the log reads as the
    /// straight line of the branch the user is on.
    pub fn log(&mut self) -> anyhow::Result<()> {
        let mut current = Some(self.head_commit()?);

        while let Some(commit) = current {
            writeln!(self.writer(), "{}", commit.render()?)?;

            current = match commit.parent1() {
                Some(parent) => Some(self.store().load_commit(parent)?),
                None => None,
            };
        }

        Ok(())
    }
}
