use crate::core::{Commit, GitError, Repository};
use crate::utils::hash::CommitSeed;
use crate::utils::quote::join_unquoted;
use chrono::Utc;
use std::collections::HashSet;
use tracing::info;

/// `commit -m <message...>`
///
/// A bad or missing message is not rejected at parse time: an empty staging
/// area is reported first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitArgs {
    pub message: Option<String>,
}

impl CommitArgs {
    pub fn parse(args: &[String]) -> Self {
        let message = match args.first().map(String::as_str) {
            Some("-m") if args.len() > 1 => Some(join_unquoted(&args[1..])),
            _ => None,
        }
        .filter(|message| !message.trim().is_empty());

        Self { message }
    }
}

pub fn run(repo: &mut Repository, args: CommitArgs) -> Result<String, GitError> {
    if repo.index.staged().is_empty() {
        return Err(GitError::NothingToCommit);
    }
    let message = args.message.ok_or(GitError::MissingMessage)?;

    let files = repo.index.staged().to_vec();
    let parent = repo.head.clone();
    let timestamp = Utc::now().to_rfc3339();
    let seed = CommitSeed {
        parent: parent.as_deref(),
        message: &message,
        files: &files,
        timestamp: &timestamp,
    };

    let taken: HashSet<String> = repo.commits.iter().map(|c| c.hash.clone()).collect();
    let hash = repo
        .hasher_mut()
        .next_unique(&seed, |candidate| taken.contains(candidate));

    let author = repo.config.author();
    let commit = Commit::new(hash.clone(), message.clone(), files, parent, author);

    repo.index.take_staged();
    repo.record_commit(commit);

    info!(hash = %hash, branch = repo.current_branch(), "created commit");
    Ok(format!("[{} {}] {}", repo.current_branch(), hash, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::initialized_repo;
    use pretty_assertions::assert_eq;

    fn message(text: &str) -> CommitArgs {
        CommitArgs {
            message: Some(text.to_string()),
        }
    }

    #[test]
    fn parse_joins_and_strips_quotes() {
        let args: Vec<String> = ["-m", "\"fix", "parser\""].map(String::from).to_vec();
        assert_eq!(CommitArgs::parse(&args), message("fix parser"));
    }

    #[test]
    fn parse_without_message() {
        let bare: Vec<String> = vec!["-m".into()];
        let empty: Vec<String> = ["-m", "\"\""].map(String::from).to_vec();
        let wrong_flag: Vec<String> = ["--amend", "x"].map(String::from).to_vec();

        assert_eq!(CommitArgs::parse(&bare).message, None);
        assert_eq!(CommitArgs::parse(&empty).message, None);
        assert_eq!(CommitArgs::parse(&wrong_flag).message, None);
    }

    #[test]
    fn commit_snapshots_staging_area() {
        let mut repo = initialized_repo();
        repo.config.set("user", "name", "Ada");
        repo.config.set("user", "email", "ada@example.com");
        repo.index.add_entry("a.txt");

        let output = run(&mut repo, message("first")).unwrap();

        assert_eq!(output, "[main 000000000001] first");
        assert!(repo.index.staged().is_empty());
        assert_eq!(repo.head(), Some("000000000001"));
        assert_eq!(repo.branches.tip("main"), Some("000000000001"));

        let commit = &repo.commits[0];
        assert_eq!(commit.files, vec!["a.txt".to_string()]);
        assert_eq!(commit.parent, None);
        assert_eq!(commit.author.format_signature(), "Ada <ada@example.com>");
    }

    #[test]
    fn second_commit_points_at_first() {
        let mut repo = initialized_repo();
        repo.index.add_entry("a.txt");
        run(&mut repo, message("first")).unwrap();
        repo.index.add_entry("b.txt");
        run(&mut repo, message("second")).unwrap();

        assert_eq!(repo.commits.len(), 2);
        assert_eq!(repo.commits[1].parent.as_deref(), Some("000000000001"));
        assert_eq!(repo.commits[1].files, vec!["b.txt".to_string()]);
    }

    #[test]
    fn empty_staging_area_wins_over_missing_message() {
        let mut repo = initialized_repo();
        assert_eq!(
            run(&mut repo, CommitArgs { message: None }),
            Err(GitError::NothingToCommit)
        );
        assert!(repo.commits.is_empty());
    }

    #[test]
    fn missing_message_keeps_staging_area() {
        let mut repo = initialized_repo();
        repo.index.add_entry("a.txt");
        let before = repo.clone();

        assert_eq!(
            run(&mut repo, CommitArgs { message: None }),
            Err(GitError::MissingMessage)
        );
        assert_eq!(repo, before);
    }
}
