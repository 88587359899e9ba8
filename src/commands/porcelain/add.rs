use crate::areas::repository::Repository;
use crate::artifacts::objects::tracked::TrackedEntry;
use std::io::Write;

impl Repository {
    /// Stage a file for addition, or every workspace file for `.`
    ///
    /// Staging a file whose working contents match the tracked version
    /// clears any staged copy instead (the edit was reverted), and staging
    /// always cancels a pending removal of the same filename.
    pub fn add(&mut self, name: &str) -> anyhow::Result<()> {
        if name == "." {
            for file in self.workspace().list_files()? {
                self.add(&file)?;
            }
            return Ok(());
        }

        if !self.workspace().contains(name) {
            writeln!(self.writer(), "File does not exist.")?;
            return Ok(());
        }

        let removal_cancelled = self.current_branch_mut().unstage_removal(name);
        if removal_cancelled {
            self.persist_branch()?;
        }

        let fingerprint = self.workspace().fingerprint_of(name)?;
        let entry = TrackedEntry::new(fingerprint, name.to_string());
        if self.head_commit()?.tracked().contains_entry(&entry) {
            self.staging().unstage(name)?;
            return Ok(());
        }

        self.staging()
            .stage(&self.workspace().file_path(name), name)
    }
}
