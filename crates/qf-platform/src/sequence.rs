//! Sequence Id Generator
//!
//! Ids are `{prefix}-{n}` with `n` starting at 1 and incremented per prefix.
//! Counters only move forward, so ids are never reused after deletion.

use std::collections::HashMap;

/// Id prefixes, one counter each
pub mod prefix {
    pub const BRANCH: &str = "branch";
    pub const SECTOR: &str = "sector";
    pub const USER: &str = "user";
    pub const DOCUMENT: &str = "document";
    pub const DOCUMENT_VERSION: &str = "documentVersion";
    pub const WORKFLOW: &str = "workflow";
    pub const WORKFLOW_STEP: &str = "workflowStep";
    pub const PROCESS: &str = "process";
    pub const ACTIVITY: &str = "activity";
}

#[derive(Debug, Default, Clone)]
pub struct SequenceGenerator {
    counters: HashMap<&'static str, u64>,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id for `prefix`.
    pub fn next(&mut self, prefix: &'static str) -> String {
        let counter = self.counters.entry(prefix).or_insert(0);
        *counter += 1;
        format!("{}-{}", prefix, counter)
    }
}

/// Numeric suffix of a sequence id, if it has one.
#[cfg(test)]
pub(crate) fn sequence_number(id: &str) -> Option<u64> {
    id.rsplit_once('-').and_then(|(_, n)| n.parse().ok())
}
