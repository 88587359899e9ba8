//! Commit record
//!
//! Commits are the immutable nodes of the commit graph. Each one records a
//! message, its creation time, up to two parent fingerprints and the set of
//! tracked files. The record's identity is the fingerprint of its
//! serialized form, so no field can change after the record is saved.
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! timestamp <millis>
//! date <EEE MMM dd HH:mm:ss yyyy Z>
//! parent <fingerprint>
//! entry <fingerprint><name>
//!
//! <commit message>
//! ```
//! Parent lines appear zero, one or two times (primary parent first);
//! entry lines are sorted by filename so equal records serialize equally.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tracked::{TrackedEntry, TrackedSet};
use anyhow::Context;
use bytes::Bytes;
use std::io::{BufRead, Write};

/// Display pattern for commit times, `EEE MMM dd HH:mm:ss yyyy Z`
const DISPLAY_TIME_PATTERN: &str = "%a %b %d %H:%M:%S %Y %z";

/// Message of the commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Immutable node of the commit graph
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Commit message
    message: String,
    /// Milliseconds since the epoch, used for ordering during merges
    timestamp: i64,
    /// Human-readable creation time, persisted for log rendering
    display_time: String,
    /// Parent fingerprints: empty for the initial commit, two for merges
    parents: Vec<ObjectId>,
    /// Files tracked by this commit
    tracked: TrackedSet,
}

impl Commit {
    /// Create a commit timestamped with the current local time
    pub fn new(message: String, parents: Vec<ObjectId>, tracked: TrackedSet) -> Self {
        Self::with_time(message, parents, tracked, chrono::Local::now())
    }

    /// Create a commit with an explicit creation time
    pub fn with_time(
        message: String,
        parents: Vec<ObjectId>,
        tracked: TrackedSet,
        time: chrono::DateTime<chrono::Local>,
    ) -> Self {
        Commit {
            message,
            timestamp: time.timestamp_millis(),
            display_time: time.format(DISPLAY_TIME_PATTERN).to_string(),
            parents,
            tracked,
        }
    }

    /// The parentless epoch commit created once per repository by `init`
    pub fn initial() -> Self {
        let epoch = chrono::DateTime::<chrono::Utc>::default().with_timezone(&chrono::Local);
        Self::with_time(
            INITIAL_COMMIT_MESSAGE.to_string(),
            Vec::new(),
            TrackedSet::new(),
            epoch,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// The primary parent, absent only for the initial commit
    pub fn parent1(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    /// The merge parent, present only for merge commits
    pub fn parent2(&self) -> Option<&ObjectId> {
        self.parents.get(1)
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }

    pub fn tracked(&self) -> &TrackedSet {
        &self.tracked
    }

    /// Render the commit the way `log` and the global log print it
    ///
    /// ```text
    /// ===
    /// commit <fingerprint>
    /// Merge: <short-parent1> <short-parent2>
    /// Date: <display time>
    /// <message>
    /// ```
    /// The rendering ends with a newline; printing it through `writeln!`
    /// yields the blank line that separates entries.
    pub fn render(&self) -> anyhow::Result<String> {
        let mut rendered = format!("===\ncommit {}\n", self.fingerprint()?);

        if let (Some(parent1), Some(parent2)) = (self.parent1(), self.parent2()) {
            rendered.push_str(&format!(
                "Merge: {} {}\n",
                parent1.to_short_id(),
                parent2.to_short_id()
            ));
        }

        rendered.push_str(&format!("Date: {}\n{}\n", self.display_time, self.message));

        Ok(rendered)
    }

    /// Reduce to the fields the merge-base search needs
    pub fn slim(&self) -> anyhow::Result<SlimCommit> {
        Ok(SlimCommit {
            fingerprint: self.fingerprint()?,
            parents: self.parents.clone(),
            timestamp: self.timestamp,
        })
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut body = Vec::new();

        body.push(format!("timestamp {}", self.timestamp));
        body.push(format!("date {}", self.display_time));
        for parent in &self.parents {
            body.push(format!("parent {}", parent));
        }
        for entry in self.tracked.entries() {
            body.push(format!("entry {}", entry.encoded()));
        }
        body.push(String::new());
        body.push(self.message.to_string());

        let body = body.join("\n");

        let mut commit_bytes = Vec::new();
        let header = format!("commit {}\0", body.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(body.as_bytes())?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let timestamp = lines
            .next()
            .and_then(|line| line.strip_prefix("timestamp "))
            .context("Invalid commit record: missing timestamp line")?
            .parse::<i64>()
            .context("Invalid commit record: malformed timestamp")?;

        let display_time = lines
            .next()
            .and_then(|line| line.strip_prefix("date "))
            .context("Invalid commit record: missing date line")?
            .to_string();

        let mut parents = Vec::new();
        let mut tracked = TrackedSet::new();

        let mut line = lines.next();
        while let Some(parent) = line.and_then(|l| l.strip_prefix("parent ")) {
            parents.push(ObjectId::try_parse(parent.to_string())?);
            line = lines.next();
        }
        while let Some(entry) = line.and_then(|l| l.strip_prefix("entry ")) {
            tracked.insert(TrackedEntry::try_parse(entry)?);
            line = lines.next();
        }

        match line {
            Some("") => {}
            _ => anyhow::bail!("Invalid commit record: missing message separator"),
        }

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Commit {
            message,
            timestamp,
            display_time,
            parents,
            tracked,
        })
    }
}

impl Object for Commit {}

/// Slim commit view used by the merge-base search
///
/// Carries only the identity, parent links and timestamp so graph walks do
/// not drag tracked sets and messages around.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub fingerprint: ObjectId,
    pub parents: Vec<ObjectId>,
    pub timestamp: i64,
}
