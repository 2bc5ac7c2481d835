use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StashEntry {
    /// Copy of the tracked set at the moment of stashing.
    pub files: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Append-only stash list. There is no pop or apply.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Stash {
    entries: Vec<StashEntry>,
}

impl Stash {
    pub fn push(&mut self, files: Vec<String>) -> usize {
        self.entries.push(StashEntry {
            files,
            created_at: Utc::now(),
        });
        self.entries.len()
    }

    pub fn entries(&self) -> &[StashEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
