use crate::core::{GitError, Repository};
use tracing::info;

pub fn run(repo: &mut Repository) -> Result<String, GitError> {
    if !repo.init() {
        return Ok("Git repository already initialized".to_string());
    }

    info!(branch = repo.current_branch(), "initialized repository");
    Ok("Initialized empty Git repository".to_string())
}
