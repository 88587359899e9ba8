//! Common ancestor finder for merge operations
//!
//! This module finds the lowest common ancestor of two commits in the
//! commit graph, the join point three-way merges classify against.
//!
//! ## Algorithm Overview
//!
//! The search runs in two phases:
//!
//! 1. Collect every ancestor of the current commit (itself included) by a
//!    breadth-first walk over parent links.
//! 2. Walk the given commit's history newest-timestamp-first using a
//!    priority queue. The first commit encountered that is also reachable
//!    from the current commit is the lowest common ancestor.
//!
//! Phase 2's ordering is what makes the result "lowest": any common
//! ancestor other than the returned one lies further down the given side's
//! history and is only reached later. Unlike a timestamp-synchronized
//! double walk, reachable-ancestor intersection stays correct on
//! criss-cross shapes, where both sides contain merges of each other.
//!
//! Every repository shares the initial commit, so two branches of the same
//! repository always have a common ancestor.
//!
//! ## Debug Logging
//!
//! Detailed traversal logging is compiled in with the `debug_merge` feature
//! flag (`cargo build --features debug_merge`).

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BinaryHeap, HashSet, VecDeque};

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Finds the lowest common ancestor of two commits
///
/// The finder takes a generic function that loads the slim form of any
/// commit, so it works against the object store in production and an
/// in-memory graph in tests.
pub struct LcaFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    /// Function to load commit data for any given commit id
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> LcaFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Find the lowest common ancestor of `current` and `given`
    ///
    /// Returns the current commit itself when the two are equal, the given
    /// commit when it is an ancestor of current (and vice versa), and None
    /// only when the commits share no history at all.
    pub fn find_lowest_common_ancestor(
        &self,
        current: &ObjectId,
        given: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let reachable = self.ancestors_of(current)?;

        debug_log!(
            "Ancestors of {}: {}",
            current,
            reachable
                .iter()
                .map(|fingerprint| fingerprint.as_ref())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut queue = BinaryHeap::new();
        let mut visited = HashSet::new();

        let given_commit = (self.commit_loader)(given)?;
        queue.push((given_commit.timestamp, given.clone()));

        while let Some((_, fingerprint)) = queue.pop() {
            if !visited.insert(fingerprint.clone()) {
                continue;
            }

            debug_log!("Visiting {} from the given side", fingerprint);

            if reachable.contains(&fingerprint) {
                return Ok(Some(fingerprint));
            }

            for parent in (self.commit_loader)(&fingerprint)?.parents {
                let parent_commit = (self.commit_loader)(&parent)?;
                queue.push((parent_commit.timestamp, parent));
            }
        }

        Ok(None)
    }

    /// Every commit reachable from `start` through parent links, inclusive
    fn ancestors_of(&self, start: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut reachable = HashSet::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(fingerprint) = queue.pop_front() {
            if !reachable.insert(fingerprint.clone()) {
                continue;
            }

            for parent in (self.commit_loader)(&fingerprint)?.parents {
                queue.push_back(parent);
            }
        }

        Ok(reachable)
    }
}
