use crate::core::{GitError, Repository};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutArgs {
    /// `checkout -b <name>`
    Create(String),
    /// `checkout <name>`
    Switch(String),
}

impl CheckoutArgs {
    pub fn parse(args: &[String]) -> Result<Self, GitError> {
        match args.first().map(String::as_str) {
            Some("-b") => args
                .get(1)
                .map(|name| CheckoutArgs::Create(name.clone()))
                .ok_or(GitError::MissingBranchName),
            Some(name) => Ok(CheckoutArgs::Switch(name.to_string())),
            None => Err(GitError::MissingBranchName),
        }
    }
}

pub fn run(repo: &mut Repository, args: CheckoutArgs) -> Result<String, GitError> {
    match args {
        CheckoutArgs::Create(name) => {
            let head = repo.head.clone();
            repo.branches.set(&name, head);
            repo.current_branch = name.clone();
            info!(branch = %name, "created and switched branch");
            Ok(format!("Switched to a new branch '{}'", name))
        }
        CheckoutArgs::Switch(name) => {
            if !repo.branches.contains(&name) {
                return Err(GitError::BranchDoesNotExist(name));
            }
            repo.switch_branch(&name);
            info!(branch = %name, head = ?repo.head, "switched branch");
            Ok(format!("Switched to branch '{}'", name))
        }
    }
}
