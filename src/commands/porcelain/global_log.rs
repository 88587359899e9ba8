use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the global log file verbatim
    pub fn print_global_log(&mut self) -> anyhow::Result<()> {
        let log = self.global_log().read()?;
        writeln!(self.writer(), "{}", log)?;

        Ok(())
    }
}
