/// Synthetic diff for a path the simulator knows nothing about except its
/// name: always a one-line new file.
pub fn new_file_diff(file_path: &str) -> String {
    let mut output = format_diff_header(file_path);
    output.push_str("@@ -0,0 +1 @@\n");
    output.push_str(&format!("+{} content\n", file_path));
    output
}

fn format_diff_header(file_path: &str) -> String {
    format!(
        "diff --git a/{} b/{}\nnew file mode 100644\n--- /dev/null\n+++ b/{}\n",
        file_path, file_path, file_path
    )
}

/// Counts `+`/`-` lines, ignoring the `+++`/`---` headers.
pub fn calculate_diff_stats(diff: &str) -> (usize, usize) {
    let mut additions = 0;
    let mut deletions = 0;

    for line in diff.lines() {
        match line.chars().next() {
            Some('+') if !line.starts_with("+++") => additions += 1,
            Some('-') if !line.starts_with("---") => deletions += 1,
            _ => {}
        }
    }

    (additions, deletions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_fixed_template() {
        assert_eq!(
            new_file_diff("notes.md"),
            "diff --git a/notes.md b/notes.md\n\
             new file mode 100644\n\
             --- /dev/null\n\
             +++ b/notes.md\n\
             @@ -0,0 +1 @@\n\
             +notes.md content\n"
        );
    }

    #[test]
    fn stats_skip_headers() {
        let diff = format!("{}{}", new_file_diff("a"), new_file_diff("b"));
        assert_eq!(calculate_diff_stats(&diff), (2, 0));
    }
}
