pub struct ReviewPromptBuilder;

impl ReviewPromptBuilder {
    /// Builds the (system, user) prompt pair for a single-issue review.
    /// Diffs beyond `max_diff_chars` are truncated on a line boundary so the
    /// request stays inside the model's context window.
    pub fn build_review_prompt(diff: &str, max_diff_chars: usize) -> (String, String) {
        let system_prompt = r#"You are a senior code reviewer.
You review GitHub Pull Request diffs and report at most ONE issue per review.
Respond with a single JSON object and nothing else.

If you find an issue, use this format:
{"file":"src/index.js","line":5,"message":"Consider handling null values."}

The "file" value must be a path that appears in the diff, and "line" must be
a line number touched by the diff. If the changes look fine, respond with {}."#
            .to_string();

        let user_prompt = format!(
            "Review the following GitHub Pull Request diff.\n\nDiff:\n{}",
            truncate_on_line_boundary(diff, max_diff_chars)
        );

        (system_prompt, user_prompt)
    }
}

fn truncate_on_line_boundary(diff: &str, max_chars: usize) -> &str {
    if diff.len() <= max_chars {
        return diff;
    }

    let mut end = max_chars;
    while !diff.is_char_boundary(end) {
        end -= 1;
    }
    let cut = diff[..end].rfind('\n').unwrap_or(0);
    &diff[..cut]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_review_prompt_embeds_diff_verbatim() {
        let diff = "--- a/utils.py\n+++ b/utils.py\n@@ -12,0 +12,1 @@\n+x = 1\n";
        let (system, user) = ReviewPromptBuilder::build_review_prompt(diff, 10_000);

        assert!(system.contains("at most ONE issue"));
        assert!(user.contains(diff));
    }

    #[test]
    fn long_diffs_are_cut_on_a_line_boundary() {
        let diff = "line one\nline two\nline three\n".repeat(100);
        let (_, user) = ReviewPromptBuilder::build_review_prompt(&diff, 50);

        assert!(user.len() < diff.len());
        assert!(user.ends_with("line one") || user.ends_with("line two") || user.ends_with("line three"));
    }
}
