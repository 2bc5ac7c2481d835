use crate::core::{Commit, GitError, Repository};

pub fn run(repo: &Repository) -> Result<String, GitError> {
    if repo.commits.is_empty() {
        return Ok("No commits yet".to_string());
    }

    Ok(repo
        .history()
        .map(format_full_commit)
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn format_full_commit(commit: &Commit) -> String {
    format!(
        "commit {}\nAuthor: {}\nDate: {}\n\n    {}",
        commit.hash,
        commit.author,
        commit.local_date(),
        commit.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::initialized_repo;
    use crate::core::Author;

    #[test]
    fn empty_history() {
        let repo = initialized_repo();
        assert_eq!(run(&repo).unwrap(), "No commits yet");
    }

    #[test]
    fn newest_first() {
        let mut repo = initialized_repo();
        for (hash, message) in [("aaa", "first"), ("bbb", "second")] {
            repo.record_commit(Commit::new(
                hash.into(),
                message.into(),
                vec![],
                repo.head.clone(),
                Author::new("Ada".into(), "ada@example.com".into()),
            ));
        }

        let output = run(&repo).unwrap();
        let hashes: Vec<_> = output
            .lines()
            .filter_map(|line| line.strip_prefix("commit "))
            .collect();
        assert_eq!(hashes, vec!["bbb", "aaa"]);

        let first_entry: Vec<_> = output.lines().take(5).collect();
        assert_eq!(first_entry[1], "Author: Ada <ada@example.com>");
        assert!(first_entry[2].starts_with("Date: "));
        assert_eq!(first_entry[3], "");
        assert_eq!(first_entry[4], "    second");
    }
}
