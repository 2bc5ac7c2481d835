use crate::core::{GitError, Repository};

pub fn run(repo: &Repository) -> Result<String, GitError> {
    let mut sections = vec![format!("On branch {}", repo.current_branch())];

    let staged = repo.index.staged();
    if !staged.is_empty() {
        let mut section = String::from("Changes to be committed:");
        for file in staged {
            section.push_str(&format!("\n  new file: {}", file));
        }
        sections.push(section);
    }

    let unstaged = repo.index.unstaged();
    if !unstaged.is_empty() {
        let mut section = String::from("Changes not staged for commit:");
        for file in &unstaged {
            section.push_str(&format!("\n  modified: {}", file));
        }
        sections.push(section);
    }

    if staged.is_empty() && unstaged.is_empty() {
        sections.push("nothing to commit, working tree clean".to_string());
    }

    Ok(sections.join("\n\n"))
}
