use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print the fingerprint of every commit whose message matches exactly
    ///
    /// Commits are enumerated through the global log, newest first.
    pub fn find(&mut self, message: &str) -> anyhow::Result<()> {
        let mut found = false;

        for id in self.global_log().commit_ids()? {
            let Ok(fingerprint) = ObjectId::try_parse(id) else {
                continue;
            };

            let commit = self.store().load_commit(&fingerprint)?;
            if commit.message() == message {
                writeln!(self.writer(), "{}", fingerprint)?;
                found = true;
            }
        }

        if !found {
            writeln!(self.writer(), "Found no commit with that message.")?;
        }

        Ok(())
    }
}
