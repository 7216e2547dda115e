use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Operator decision for one image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Not reviewed yet.
    #[default]
    Unset,
    Keep,
    /// Moved to the rejected folder when the session ends.
    Delete,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Unset => "",
            Decision::Keep => "Keep",
            Decision::Delete => "Delete",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decisions made during a session, keyed by file name.
///
/// Entries are only ever added or overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewState {
    decisions: BTreeMap<String, Decision>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, filename: &str, decision: Decision) {
        self.decisions.insert(filename.to_string(), decision);
    }

    pub fn decision_of(&self, filename: &str) -> Decision {
        self.decisions.get(filename).copied().unwrap_or_default()
    }

    /// File names currently marked [`Decision::Delete`], in name order.
    pub fn marked_for_deletion(&self) -> impl Iterator<Item = &str> {
        self.decisions
            .iter()
            .filter(|(_, d)| **d == Decision::Delete)
            .map(|(name, _)| name.as_str())
    }

    /// Number of (keep, delete) decisions.
    pub fn counts(&self) -> (usize, usize) {
        self.decisions
            .values()
            .fold((0, 0), |(keep, delete), d| match d {
                Decision::Keep => (keep + 1, delete),
                Decision::Delete => (keep, delete + 1),
                Decision::Unset => (keep, delete),
            })
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
