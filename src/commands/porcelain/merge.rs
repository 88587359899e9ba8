use crate::areas::repository::Repository;
use crate::artifacts::merge::lca_finder::LcaFinder;
use crate::artifacts::merge::resolution::{classify, conflict_text, MergeAction};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Merge a branch into the current branch
    ///
    /// Runs the precondition checks in order (uncommitted changes, missing
    /// branch, self-merge, untracked files), takes the ancestor/fast-forward
    /// short cuts, and otherwise applies the three-way classification and
    /// records a two-parent merge commit.
    pub fn merge(&mut self, given_name: &str) -> anyhow::Result<()> {
        let has_staged_changes =
            !self.staging().is_empty()? || self.current_branch().has_removals();
        if has_staged_changes {
            writeln!(self.writer(), "You have uncommitted changes.")?;
            return Ok(());
        }

        if !self.refs().branch_exists(given_name) {
            writeln!(self.writer(), "No such branch exists.")?;
            return Ok(());
        }

        if given_name == self.current_branch().name() {
            writeln!(self.writer(), "Cannot merge a branch with itself.")?;
            return Ok(());
        }

        if !self.ensure_no_untracked()? {
            return Ok(());
        }

        let current_name = self.current_branch().name().to_string();
        let current_tip = self.current_branch().tip().clone();
        let given_tip = self.refs().load_branch(given_name)?.tip().clone();

        let ancestor_tip = {
            let store = self.store();
            let finder =
                LcaFinder::new(|fingerprint: &ObjectId| store.load_commit(fingerprint)?.slim());

            finder
                .find_lowest_common_ancestor(&current_tip, &given_tip)?
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "no common ancestor between {} and {}",
                        current_name,
                        given_name
                    )
                })?
        };

        if ancestor_tip == given_tip {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(());
        }

        if ancestor_tip == current_tip {
            let given_commit = self.store().load_commit(&given_tip)?;
            self.materialize(&given_commit)?;
            self.current_branch_mut().set_tip(given_tip);
            self.persist_branch()?;

            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(());
        }

        let ancestor_commit = self.store().load_commit(&ancestor_tip)?;
        let current_commit = self.store().load_commit(&current_tip)?;
        let given_commit = self.store().load_commit(&given_tip)?;

        let actions = classify(
            ancestor_commit.tracked(),
            current_commit.tracked(),
            given_commit.tracked(),
        );

        let mut conflicted = false;
        for (name, action) in actions {
            match action {
                MergeAction::TakeGiven => {
                    self.checkout_file(&given_commit, &name)?;
                    self.add(&name)?;
                }
                MergeAction::Remove => {
                    self.rm(&name)?;
                }
                MergeAction::Conflict => {
                    let current_contents = self.tracked_contents(&current_commit, &name)?;
                    let given_contents = self.tracked_contents(&given_commit, &name)?;

                    self.workspace()
                        .write_file(&name, &conflict_text(&current_contents, &given_contents))?;
                    self.add(&name)?;
                    conflicted = true;
                }
            }
        }

        if conflicted {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        let message = format!("Merged {} into {}.", given_name, current_name);
        let commit = self.build_commit(&message, vec![current_tip, given_tip])?;
        self.record_commit(&commit)?;

        Ok(())
    }

    /// A commit's contents for a filename, empty when it is not tracked
    fn tracked_contents(&self, commit: &Commit, name: &str) -> anyhow::Result<String> {
        match commit.tracked().entry_for(name) {
            Some(entry) => self.store().read_blob(&entry),
            None => Ok(String::new()),
        }
    }
}
