use crate::areas::repository::Repository;
use crate::artifacts::status::report::StatusReport;
use std::io::Write;

impl Repository {
    /// Print the five status sections
    pub fn status(&mut self) -> anyhow::Result<()> {
        let report = StatusReport::collect(self)?;
        write!(self.writer(), "{}", report.render())?;

        Ok(())
    }
}
