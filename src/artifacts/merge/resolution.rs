//! Three-way merge classification
//!
//! Every filename known to the ancestor, current or given commit is
//! classified against the three tracked sets, producing the action the
//! merge applies to the working directory. Classification is pure: the
//! merge command owns the side effects (checkout, staging, conflict file
//! synthesis), this module only decides them.
//!
//! Filenames are processed in three passes sharing a visited set: the
//! given commit's files, then the current commit's, then the ancestor's.
//! Comparisons are always pairwise (fingerprint, filename) equalities.

use crate::artifacts::objects::tracked::TrackedSet;
use std::collections::HashSet;

/// What the merge does to one filename
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MergeAction {
    /// Check out the given commit's version and stage it
    TakeGiven,
    /// Remove the file and stage the removal
    Remove,
    /// Synthesize a conflict file from both versions and stage it
    Conflict,
}

/// Classify every relevant filename across (ancestor, current, given)
///
/// Files absent from the result keep the current branch's version. The
/// returned actions preserve the pass order, so conflicts stemming from
/// ancestor-only evidence come last.
pub fn classify(
    ancestor: &TrackedSet,
    current: &TrackedSet,
    given: &TrackedSet,
) -> Vec<(String, MergeAction)> {
    let mut visited = HashSet::new();
    let mut actions = Vec::new();

    for name in given.names() {
        let in_current = current.contains_name(name);
        let in_ancestor = ancestor.contains_name(name);
        let given_entry = given.entry_for(name);
        let current_entry = current.entry_for(name);
        let ancestor_entry = ancestor.entry_for(name);

        let unchanged_in_current = in_current && in_ancestor && current_entry == ancestor_entry;
        let added_by_given = !in_current && !in_ancestor;

        if (unchanged_in_current && given_entry != ancestor_entry) || added_by_given {
            actions.push((name.clone(), MergeAction::TakeGiven));
            visited.insert(name.clone());
        } else if in_current && !in_ancestor && given_entry != current_entry {
            // Added independently on both sides with different contents
            actions.push((name.clone(), MergeAction::Conflict));
            visited.insert(name.clone());
        }
    }

    for name in current.names() {
        if visited.contains(name) {
            continue;
        }

        let current_entry = current.entry_for(name);
        let deleted_by_given = !given.contains_name(name)
            && current_entry
                .as_ref()
                .map(|entry| ancestor.contains_entry(entry))
                .unwrap_or(false);

        if deleted_by_given {
            actions.push((name.clone(), MergeAction::Remove));
            visited.insert(name.clone());
        }
    }

    for name in ancestor.names() {
        if visited.contains(name) {
            continue;
        }

        let in_current = current.contains_name(name);
        let in_given = given.contains_name(name);
        let ancestor_entry = ancestor.entry_for(name);
        let current_entry = current.entry_for(name);
        let given_entry = given.entry_for(name);

        let both_changed_differently = in_current
            && in_given
            && current_entry != ancestor_entry
            && given_entry != ancestor_entry
            && current_entry != given_entry;
        let changed_here_deleted_there =
            in_current && !in_given && current_entry != ancestor_entry;
        let deleted_here_changed_there =
            in_given && !in_current && given_entry != ancestor_entry;

        if both_changed_differently || changed_here_deleted_there || deleted_here_changed_there {
            actions.push((name.clone(), MergeAction::Conflict));
            visited.insert(name.clone());
        }
    }

    actions
}

/// The byte sequence written over a conflicted file
///
/// ```text
/// <<<<<<< HEAD
/// <current contents, or empty>
/// =======
/// <given contents, or empty>
/// >>>>>>>
/// ```
pub fn conflict_text(current_contents: &str, given_contents: &str) -> String {
    format!(
        "<<<<<<< HEAD\n{}\n=======\n{}\n>>>>>>>",
        current_contents, given_contents
    )
}
