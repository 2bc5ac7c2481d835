use crate::core::{GitError, Repository};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchArgs {
    List,
    Delete(String),
    Create(String),
}

impl BranchArgs {
    pub fn parse(args: &[String]) -> Result<Self, GitError> {
        match args.first().map(String::as_str) {
            None => Ok(BranchArgs::List),
            Some("-d") => args
                .get(1)
                .map(|name| BranchArgs::Delete(name.clone()))
                .ok_or(GitError::MissingBranchName),
            Some(name) => Ok(BranchArgs::Create(name.to_string())),
        }
    }
}

pub fn run(repo: &mut Repository, args: BranchArgs) -> Result<String, GitError> {
    match args {
        BranchArgs::List => Ok(list_branches(repo)),
        BranchArgs::Delete(name) => delete_branch(repo, &name),
        BranchArgs::Create(name) => Ok(create_branch(repo, &name)),
    }
}

fn list_branches(repo: &Repository) -> String {
    repo.branches
        .iter()
        .map(|branch| {
            let marker = if branch.name == repo.current_branch() { "* " } else { "  " };
            format!("{}{}", marker, branch.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Deleting a name that was never created still reports success.
fn delete_branch(repo: &mut Repository, name: &str) -> Result<String, GitError> {
    if name == repo.current_branch() {
        return Err(GitError::CannotDeleteCurrentBranch);
    }

    let existed = repo.branches.remove(name);
    info!(branch = name, existed, "deleted branch");
    Ok(format!("Deleted branch {}", name))
}

/// Points `name` at HEAD, overwriting any branch of the same name.
fn create_branch(repo: &mut Repository, name: &str) -> String {
    let head = repo.head.clone();
    info!(branch = name, head = ?head, "created branch");
    repo.branches.set(name, head);
    format!("Created branch {}", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::initialized_repo;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_marks_current_in_insertion_order() {
        let mut repo = initialized_repo();
        run(&mut repo, BranchArgs::Create("zeta".into())).unwrap();
        run(&mut repo, BranchArgs::Create("alpha".into())).unwrap();
        repo.current_branch = "zeta".into();

        assert_eq!(run(&mut repo, BranchArgs::List).unwrap(), "  main\n* zeta\n  alpha");
    }

    #[test]
    fn create_points_at_head_and_overwrites() {
        let mut repo = initialized_repo();
        run(&mut repo, BranchArgs::Create("topic".into())).unwrap();
        assert_eq!(repo.branches.tip("topic"), None);

        repo.head = Some("abc".into());
        let output = run(&mut repo, BranchArgs::Create("topic".into())).unwrap();
        assert_eq!(output, "Created branch topic");
        assert_eq!(repo.branches.tip("topic"), Some("abc"));
        assert_eq!(repo.current_branch(), "main");
    }

    #[test]
    fn cannot_delete_current_branch() {
        let mut repo = initialized_repo();
        let before = repo.branches.clone();

        assert_eq!(
            run(&mut repo, BranchArgs::Delete("main".into())),
            Err(GitError::CannotDeleteCurrentBranch)
        );
        assert_eq!(repo.branches, before);
    }

    #[test]
    fn deleting_unknown_branch_succeeds() {
        let mut repo = initialized_repo();
        assert_eq!(
            run(&mut repo, BranchArgs::Delete("ghost".into())).unwrap(),
            "Deleted branch ghost"
        );
    }

    #[test]
    fn parse_forms() {
        let delete: Vec<String> = ["-d", "topic"].map(String::from).to_vec();
        assert_eq!(BranchArgs::parse(&[]), Ok(BranchArgs::List));
        assert_eq!(BranchArgs::parse(&delete), Ok(BranchArgs::Delete("topic".into())));
        assert_eq!(BranchArgs::parse(&["-d".into()]), Err(GitError::MissingBranchName));
    }
}
