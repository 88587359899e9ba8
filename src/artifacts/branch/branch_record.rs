//! Branch record
//!
//! A branch is a named pointer to its tip commit plus the set of filenames
//! staged for removal on that branch. Records are persisted as plain text
//! under `.gitlet/refs/<name>`:
//!
//! ```text
//! branch <name>
//! tip <fingerprint>
//! rm <filename>
//! ```
//!
//! The removal stage is ordered so listings derived from it are stable.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeSet;

/// Named pointer to a commit, with the branch's removal stage
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Branch {
    name: String,
    tip: ObjectId,
    removal_stage: BTreeSet<String>,
}

impl Branch {
    pub fn new(name: String, tip: ObjectId) -> Self {
        Branch {
            name,
            tip,
            removal_stage: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tip(&self) -> &ObjectId {
        &self.tip
    }

    pub fn set_tip(&mut self, tip: ObjectId) {
        self.tip = tip;
    }

    pub fn removal_stage(&self) -> &BTreeSet<String> {
        &self.removal_stage
    }

    pub fn has_removals(&self) -> bool {
        !self.removal_stage.is_empty()
    }

    pub fn is_removal_staged(&self, name: &str) -> bool {
        self.removal_stage.contains(name)
    }

    pub fn stage_removal(&mut self, name: &str) {
        self.removal_stage.insert(name.to_string());
    }

    /// Un-stage a pending removal; true if one was staged
    pub fn unstage_removal(&mut self, name: &str) -> bool {
        self.removal_stage.remove(name)
    }

    pub fn clear_removals(&mut self) {
        self.removal_stage.clear();
    }

    /// Encode the record for its ref file
    pub fn encode(&self) -> String {
        let mut lines = vec![
            format!("branch {}", self.name),
            format!("tip {}", self.tip),
        ];
        for name in &self.removal_stage {
            lines.push(format!("rm {}", name));
        }

        lines.join("\n")
    }

    /// Parse a record from its ref file contents
    pub fn decode(raw: &str) -> anyhow::Result<Self> {
        let mut lines = raw.lines();

        let name = lines
            .next()
            .and_then(|line| line.strip_prefix("branch "))
            .context("Invalid branch record: missing branch line")?
            .to_string();

        let tip = lines
            .next()
            .and_then(|line| line.strip_prefix("tip "))
            .context("Invalid branch record: missing tip line")?;
        let tip = ObjectId::try_parse(tip.to_string())?;

        let mut removal_stage = BTreeSet::new();
        for line in lines {
            let name = line
                .strip_prefix("rm ")
                .with_context(|| format!("Invalid branch record line: {}", line))?;
            removal_stage.insert(name.to_string());
        }

        Ok(Branch {
            name,
            tip,
            removal_stage,
        })
    }
}
