use crate::commands::push::TransferArgs;
use crate::core::{GitError, Repository};
use tracing::info;

pub fn run(repo: &mut Repository, args: TransferArgs) -> Result<String, GitError> {
    args.validate(repo)?;

    info!(remote = %args.remote, branch = %args.branch, "pull");
    Ok(format!("Pulled from {}/{}", args.remote, args.branch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::initialized_repo;

    #[test]
    fn pull_only_checks_the_remote_name() {
        let mut repo = initialized_repo();
        let args = TransferArgs {
            remote: "origin".into(),
            branch: "no-such-branch".into(),
        };
        assert_eq!(
            run(&mut repo, args.clone()),
            Err(GitError::RemoteNotFound("origin".into()))
        );

        repo.remotes.add("origin", "http://x");
        assert_eq!(run(&mut repo, args).unwrap(), "Pulled from origin/no-such-branch");
    }
}
