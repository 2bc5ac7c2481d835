use crate::core::{GitError, Repository};
use crate::utils::diff::{calculate_diff_stats, new_file_diff};
use tracing::debug;

/// Every tracked-but-unstaged path is shown as a one-line new file.
pub fn run(repo: &Repository) -> Result<String, GitError> {
    let diff: String = repo
        .index
        .unstaged()
        .into_iter()
        .map(new_file_diff)
        .collect();

    if diff.is_empty() {
        return Ok("No differences".to_string());
    }

    let (additions, deletions) = calculate_diff_stats(&diff);
    debug!(additions, deletions, "rendered diff");
    Ok(diff.trim_end().to_string())
}
