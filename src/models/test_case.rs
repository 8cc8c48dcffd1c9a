//! Test case model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An input/expected-output fixture used to judge a submission.
///
/// Hidden cases (`is_public = false`) are run during evaluation like any
/// other case but their text is never returned to student-facing views.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub test_case_id: i32,
    pub practical_id: i32,
    pub input: String,
    pub expected_output: String,
    pub is_public: bool,
}

impl TestCase {
    /// Get a preview of a text field (truncated at a char boundary)
    pub fn preview(text: &str, max_len: usize) -> String {
        if text.len() <= max_len {
            text.to_string()
        } else {
            let mut end = max_len;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &text[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates() {
        assert_eq!(TestCase::preview("hello", 10), "hello");
        assert_eq!(TestCase::preview("hello world", 5), "hello...");
    }
}
