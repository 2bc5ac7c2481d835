use crate::core::{GitError, Repository};
use tracing::info;

/// Saves a copy of the whole tracked set and then empties it, staged paths
/// included. The staging area itself is not touched.
pub fn run(repo: &mut Repository) -> Result<String, GitError> {
    if !repo.index.has_unstaged() {
        return Err(GitError::NothingToStash);
    }

    let files = repo.index.take_tracked();
    let depth = repo.stash.push(files);

    info!(depth, "stashed tracked files");
    Ok("Saved working directory and index state".to_string())
}
