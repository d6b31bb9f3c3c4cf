use serde::Serialize;
use serde_json::Value;

/// One actionable finding from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub file: String,
    /// Absent when the model flags a file without anchoring a line; the
    /// publisher then skips the inline attempt.
    pub line: Option<u64>,
    pub message: String,
}

/// Outcome of interpreting the model's completion text. `NoIssue` and
/// `Malformed` both end the run without posting, but are kept apart so logs
/// (and tests) can tell a clean review from a model that went off-script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedReview {
    Issue(Review),
    NoIssue,
    Malformed,
}

impl ParsedReview {
    /// Interprets completion text. Anything that is not a JSON object with
    /// non-empty `file` and `message` fields means "nothing to post".
    pub fn from_completion(content: &str) -> Self {
        let value: Value = match serde_json::from_str(content.trim()) {
            Ok(value) => value,
            Err(_) => return ParsedReview::Malformed,
        };

        let file = non_empty_string(&value, "file");
        let message = non_empty_string(&value, "message");

        match (file, message) {
            (Some(file), Some(message)) => ParsedReview::Issue(Review {
                file,
                line: value.get("line").and_then(Value::as_u64),
                message,
            }),
            _ => ParsedReview::NoIssue,
        }
    }
}

fn non_empty_string(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_object_becomes_an_issue() {
        let parsed =
            ParsedReview::from_completion(r#"{"file":"a.js","line":3,"message":"x"}"#);
        assert_eq!(
            parsed,
            ParsedReview::Issue(Review {
                file: "a.js".to_string(),
                line: Some(3),
                message: "x".to_string(),
            })
        );
    }

    #[test]
    fn missing_line_still_counts_as_an_issue() {
        let parsed = ParsedReview::from_completion(r#"{"file":"a.js","message":"x"}"#);
        match parsed {
            ParsedReview::Issue(review) => assert_eq!(review.line, None),
            other => panic!("expected Issue, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_is_no_issue() {
        assert_eq!(ParsedReview::from_completion("{}"), ParsedReview::NoIssue);
    }

    #[test]
    fn missing_file_or_message_is_no_issue() {
        assert_eq!(
            ParsedReview::from_completion(r#"{"line":3,"message":"x"}"#),
            ParsedReview::NoIssue
        );
        assert_eq!(
            ParsedReview::from_completion(r#"{"file":"a.js","line":3}"#),
            ParsedReview::NoIssue
        );
        assert_eq!(
            ParsedReview::from_completion(r#"{"file":"  ","message":"x"}"#),
            ParsedReview::NoIssue
        );
    }

    #[test]
    fn non_object_json_is_no_issue() {
        assert_eq!(ParsedReview::from_completion("3"), ParsedReview::NoIssue);
        assert_eq!(
            ParsedReview::from_completion(r#""all good""#),
            ParsedReview::NoIssue
        );
    }

    #[test]
    fn prose_is_malformed() {
        assert_eq!(
            ParsedReview::from_completion("The code looks fine to me!"),
            ParsedReview::Malformed
        );
    }
}
