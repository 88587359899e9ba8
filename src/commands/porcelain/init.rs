use crate::areas::global_log::GlobalLog;
use crate::areas::object_store::ObjectStore;
use crate::areas::refs::Refs;
use crate::areas::repository::{
    Repository, DEFAULT_BRANCH, GLOBAL_LOG_FILE, OBJECTS_DIR, STAGING_DIR,
};
use crate::artifacts::branch::branch_record::Branch;
use crate::artifacts::objects::commit::Commit;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Initialize a repository in `path`
    ///
    /// Creates the `.gitlet` layout (all 256 object buckets included, so no
    /// later write ever creates a directory), the epoch initial commit, the
    /// global log seeded with it, the master branch and HEAD.
    pub fn init(path: &Path, mut writer: Box<dyn Write>) -> anyhow::Result<()> {
        if Repository::exists(path) {
            writeln!(
                writer,
                "A Gitlet version-control system already exists in the current directory."
            )?;
            return Ok(());
        }

        let gitlet_path = Repository::gitlet_path(path);
        fs::create_dir_all(&gitlet_path).context("Failed to create .gitlet directory")?;
        fs::create_dir_all(gitlet_path.join(STAGING_DIR))
            .context("Failed to create .gitlet/staging directory")?;

        let store = ObjectStore::new(gitlet_path.join(OBJECTS_DIR).into_boxed_path());
        store.create_buckets()?;

        let global_log = GlobalLog::new(gitlet_path.join(GLOBAL_LOG_FILE).into_boxed_path());
        let refs = Refs::new(gitlet_path.into_boxed_path());
        fs::create_dir_all(refs.refs_path()).context("Failed to create .gitlet/refs directory")?;

        let initial = Commit::initial();
        let tip = store.store_commit(&initial)?;
        global_log.initialize(&initial.render()?)?;

        refs.save_branch(&Branch::new(DEFAULT_BRANCH.to_string(), tip))?;
        refs.set_head(DEFAULT_BRANCH)?;

        Ok(())
    }
}
