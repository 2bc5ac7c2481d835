use serde::{Deserialize, Serialize};

/// Tracked and staged path sets.
///
/// Both sets keep insertion order, which is the order `status` and `diff`
/// report paths in. No file content is stored, only membership.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Index {
    tracked: Vec<String>,
    staged: Vec<String>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks and stages `path` in one step.
    pub fn add_entry(&mut self, path: &str) {
        if !self.is_tracked(path) {
            self.tracked.push(path.to_string());
        }
        if !self.is_staged(path) {
            self.staged.push(path.to_string());
        }
    }

    /// Stages every tracked path. Returns how many were newly staged.
    pub fn stage_all(&mut self) -> usize {
        let pending: Vec<String> = self
            .tracked
            .iter()
            .filter(|path| !self.staged.contains(path))
            .cloned()
            .collect();
        let count = pending.len();
        self.staged.extend(pending);
        count
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.tracked.iter().any(|p| p == path)
    }

    pub fn is_staged(&self, path: &str) -> bool {
        self.staged.iter().any(|p| p == path)
    }

    pub fn tracked(&self) -> &[String] {
        &self.tracked
    }

    pub fn staged(&self) -> &[String] {
        &self.staged
    }

    /// Tracked paths that are not staged, in tracking order.
    pub fn unstaged(&self) -> Vec<&str> {
        self.tracked
            .iter()
            .filter(|path| !self.is_staged(path))
            .map(String::as_str)
            .collect()
    }

    pub fn has_unstaged(&self) -> bool {
        self.tracked.iter().any(|path| !self.is_staged(path))
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && !self.has_unstaged()
    }

    /// Empties the staging area and hands back what was in it.
    pub fn take_staged(&mut self) -> Vec<String> {
        std::mem::take(&mut self.staged)
    }

    /// Empties the tracked set and hands back what was in it.
    /// The staging area is left alone.
    pub fn take_tracked(&mut self) -> Vec<String> {
        std::mem::take(&mut self.tracked)
    }
}
