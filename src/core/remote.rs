use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub url: String,
}

/// Remote name registry. Nothing here ever opens a connection.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct Remotes {
    entries: Vec<Remote>,
}

impl Remotes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, url: &str) {
        match self.entries.iter_mut().find(|r| r.name == name) {
            Some(remote) => remote.url = url.to_string(),
            None => self.entries.push(Remote {
                name: name.to_string(),
                url: url.to_string(),
            }),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Remote> {
        let position = self.entries.iter().position(|r| r.name == name)?;
        Some(self.entries.remove(position))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|r| r.name == name)
    }

    pub fn url(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.url.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Remote> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
