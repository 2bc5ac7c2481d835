use crate::core::{GitError, Repository};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeArgs {
    pub branch: String,
}

impl MergeArgs {
    pub fn parse(args: &[String]) -> Result<Self, GitError> {
        args.first()
            .map(|branch| MergeArgs {
                branch: branch.clone(),
            })
            .ok_or(GitError::MissingBranchName)
    }
}

/// Fast-forward only: HEAD is overwritten with the other branch's tip.
/// No ancestry is checked and the current branch pointer is not moved.
pub fn run(repo: &mut Repository, args: MergeArgs) -> Result<String, GitError> {
    let tip = repo
        .branches
        .tip(&args.branch)
        .map(str::to_string)
        .ok_or_else(|| GitError::BranchNotFound(args.branch.clone()))?;

    info!(branch = %args.branch, head = %tip, "fast-forwarded HEAD");
    repo.head = Some(tip);
    Ok(format!(
        "Merged branch {} into {}",
        args.branch,
        repo.current_branch()
    ))
}
