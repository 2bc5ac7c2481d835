use crate::core::{Branches, Commit, Config, GitError, Index, Remotes, Stash, DEFAULT_BRANCH};
use crate::utils::hash::{HashGenerator, HashStrategy};
use serde::{Deserialize, Serialize};

/// The whole simulated repository.
///
/// One value of this type is owned by the caller and lent mutably to each
/// command; nothing else holds on to it between commands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    pub initialized: bool,
    pub index: Index,
    pub commits: Vec<Commit>,
    pub branches: Branches,
    pub current_branch: String,
    pub head: Option<String>,
    pub stash: Stash,
    pub remotes: Remotes,
    pub config: Config,
    #[serde(skip)]
    hasher: HashGenerator,
}

impl Default for Repository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository {
    pub fn new() -> Self {
        Self::with_hash_strategy(HashStrategy::default())
    }

    pub fn with_hash_strategy(strategy: HashStrategy) -> Self {
        Self {
            initialized: false,
            index: Index::new(),
            commits: Vec::new(),
            branches: Branches::new(),
            current_branch: DEFAULT_BRANCH.to_string(),
            head: None,
            stash: Stash::default(),
            remotes: Remotes::new(),
            config: Config::new(),
            hasher: HashGenerator::new(strategy),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn require_initialized(&self) -> Result<(), GitError> {
        if self.initialized {
            Ok(())
        } else {
            Err(GitError::NotInitialized)
        }
    }

    /// Marks the repository initialized. Returns `false` if it already was,
    /// in which case nothing changes.
    pub fn init(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.head = None;
        self.branches.set(DEFAULT_BRANCH, None);
        true
    }

    pub fn head(&self) -> Option<&str> {
        self.head.as_deref()
    }

    pub fn current_branch(&self) -> &str {
        &self.current_branch
    }

    pub fn hasher_mut(&mut self) -> &mut HashGenerator {
        &mut self.hasher
    }

    pub fn find_commit(&self, hash: &str) -> Option<&Commit> {
        self.commits.iter().find(|c| c.hash == hash)
    }

    pub fn has_commit(&self, hash: &str) -> bool {
        self.find_commit(hash).is_some()
    }

    /// Appends `commit` and moves HEAD and the current branch onto it.
    pub fn record_commit(&mut self, commit: Commit) {
        let hash = commit.hash.clone();
        self.commits.push(commit);
        self.head = Some(hash.clone());
        let branch = self.current_branch.clone();
        self.branches.set(&branch, Some(hash));
    }

    /// Switches to `name` and points HEAD at its tip. The caller checks the
    /// branch exists.
    pub fn switch_branch(&mut self, name: &str) {
        self.current_branch = name.to_string();
        self.head = self.branches.tip(name).map(str::to_string);
    }

    /// Commits from newest to oldest.
    pub fn history(&self) -> impl Iterator<Item = &Commit> {
        self.commits.iter().rev()
    }
}
