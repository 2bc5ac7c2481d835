use crate::core::{GitError, Repository};
use tracing::info;

/// `<remote> <branch>` pair shared by `push` and `pull`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferArgs {
    pub remote: String,
    pub branch: String,
}

impl TransferArgs {
    /// `action` completes the usage message, e.g. `"push to"`.
    pub fn parse(args: &[String], action: &'static str) -> Result<Self, GitError> {
        match (args.first(), args.get(1)) {
            (Some(remote), Some(branch)) => Ok(Self {
                remote: remote.clone(),
                branch: branch.clone(),
            }),
            _ => Err(GitError::MissingRemoteAndBranch(action)),
        }
    }

    /// Checks the remote is registered. Nothing is transferred.
    pub fn validate(&self, repo: &Repository) -> Result<(), GitError> {
        if repo.remotes.contains(&self.remote) {
            Ok(())
        } else {
            Err(GitError::RemoteNotFound(self.remote.clone()))
        }
    }
}

pub fn run(repo: &mut Repository, args: TransferArgs) -> Result<String, GitError> {
    args.validate(repo)?;

    info!(remote = %args.remote, branch = %args.branch, "push");
    Ok(format!("Pushed to {}/{}", args.remote, args.branch))
}
