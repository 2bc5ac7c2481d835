use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const HASH_LEN: usize = 12;

/// How commit hashes are minted. Hashes are opaque tokens; nothing here
/// hashes real file content.
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    #[default]
    Random,
    Content,
    Sequential,
}

impl std::fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HashStrategy::Random => "random",
            HashStrategy::Content => "content",
            HashStrategy::Sequential => "sequential",
        };
        write!(f, "{}", name)
    }
}

/// What a content hash is computed over.
pub struct CommitSeed<'a> {
    pub parent: Option<&'a str>,
    pub message: &'a str,
    pub files: &'a [String],
    pub timestamp: &'a str,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HashGenerator {
    strategy: HashStrategy,
    sequence: u64,
}

impl HashGenerator {
    pub fn new(strategy: HashStrategy) -> Self {
        Self {
            strategy,
            sequence: 0,
        }
    }

    pub fn strategy(&self) -> HashStrategy {
        self.strategy
    }

    pub fn next(&mut self, seed: &CommitSeed<'_>) -> String {
        self.sequence += 1;
        match self.strategy {
            HashStrategy::Random => random_hash(),
            HashStrategy::Content => content_hash(seed, self.sequence),
            HashStrategy::Sequential => format!("{:0width$}", self.sequence, width = HASH_LEN),
        }
    }

    /// Mints a hash that is not in `taken`.
    pub fn next_unique<F>(&mut self, seed: &CommitSeed<'_>, taken: F) -> String
    where
        F: Fn(&str) -> bool,
    {
        loop {
            let hash = self.next(seed);
            if !taken(&hash) {
                return hash;
            }
            tracing::debug!(hash = %hash, "commit hash collision, regenerating");
        }
    }
}

fn random_hash() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..HASH_LEN].to_string()
}

fn content_hash(seed: &CommitSeed<'_>, sequence: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.parent.unwrap_or("").as_bytes());
    hasher.update(b"\0");
    hasher.update(seed.message.as_bytes());
    hasher.update(b"\0");
    for file in seed.files {
        hasher.update(file.as_bytes());
        hasher.update(b"\n");
    }
    hasher.update(seed.timestamp.as_bytes());
    hasher.update(sequence.to_be_bytes());
    hex::encode(hasher.finalize())[..HASH_LEN].to_string()
}
