use serde::{Deserialize, Serialize};

pub const DEFAULT_BRANCH: &str = "main";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub hash: Option<String>,
}

impl Branch {
    pub fn new(name: String, hash: Option<String>) -> Self {
        Self { name, hash }
    }
}

/// Branch name to tip table, kept in insertion order.
///
/// Re-creating an existing name overwrites its tip in place; the entry keeps
/// its original position.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Branches {
    entries: Vec<Branch>,
}

impl Default for Branches {
    fn default() -> Self {
        Self {
            entries: vec![Branch::new(DEFAULT_BRANCH.to_string(), None)],
        }
    }
}

impl Branches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, hash: Option<String>) {
        match self.entries.iter_mut().find(|b| b.name == name) {
            Some(branch) => branch.hash = hash,
            None => self.entries.push(Branch::new(name.to_string(), hash)),
        }
    }

    /// Removes `name` if present; reports whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|b| b.name != name);
        before != self.entries.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|b| b.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Branch> {
        self.entries.iter().find(|b| b.name == name)
    }

    /// Tip of `name`, `None` both for unknown names and for empty branches.
    pub fn tip(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|b| b.hash.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Branch> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
