use crate::commands::PROGRAM;
use crate::utils::hash::HashStrategy;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = ".gitsim.json";

/// Simulator settings. These configure the simulator itself, not the
/// simulated repository's `git config`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Literal the first token of every line must match.
    pub program: String,
    pub hash_strategy: HashStrategy,
    pub color: bool,
    /// How many input lines the session history keeps.
    pub history_limit: usize,
    pub prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            program: PROGRAM.to_string(),
            hash_strategy: HashStrategy::default(),
            color: true,
            history_limit: 100,
            prompt: "$ ".to_string(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(SETTINGS_FILE))
    }

    /// Loads `explicit` if given (it must exist), otherwise the file in the
    /// home directory if there is one, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}
