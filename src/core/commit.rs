use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// An immutable commit record. Created only by `commit`, never rewritten.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub hash: String,
    pub message: String,
    /// Copy of the staging area at commit time.
    pub files: Vec<String>,
    pub parent: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub author: Author,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Commit {
    pub fn new(
        hash: String,
        message: String,
        files: Vec<String>,
        parent: Option<String>,
        author: Author,
    ) -> Self {
        Self {
            hash,
            message,
            files,
            parent,
            timestamp: Utc::now(),
            author,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    /// Commit time in the local time zone, the way `log` prints it.
    pub fn local_date(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%a %b %d %H:%M:%S %Y %z")
            .to_string()
    }
}

impl Author {
    pub fn new(name: String, email: String) -> Self {
        Self { name, email }
    }

    pub fn format_signature(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_signature())
    }
}
