use crate::core::{GitError, Repository};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddArgs {
    /// `add .` stages everything already tracked.
    All,
    /// `add <path>` tracks and stages one path.
    Path(String),
}

impl AddArgs {
    pub fn parse(args: &[String]) -> Result<Self, GitError> {
        match args.first().map(String::as_str) {
            Some(".") => Ok(AddArgs::All),
            Some(path) => Ok(AddArgs::Path(path.to_string())),
            None => Err(GitError::MissingPath),
        }
    }
}

pub fn run(repo: &mut Repository, args: AddArgs) -> Result<String, GitError> {
    match args {
        AddArgs::All => {
            let staged = repo.index.stage_all();
            info!(staged, "staged all tracked files");
            Ok("Added all files to staging area".to_string())
        }
        AddArgs::Path(path) => {
            repo.index.add_entry(&path);
            info!(path = %path, "staged file");
            Ok(format!("Added {} to staging area", path))
        }
    }
}
