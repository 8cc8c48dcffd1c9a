//! Input validation utilities

use crate::constants::{MAX_SOURCE_CODE_SIZE, MAX_STDIN_SIZE, MAX_TEST_CASE_TEXT_SIZE};

/// Validate submitted source code
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.trim().is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() > MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 64KB");
    }
    Ok(())
}

/// Validate caller-provided stdin for ad hoc runs
pub fn validate_stdin(stdin: &str) -> Result<(), &'static str> {
    if stdin.len() > MAX_STDIN_SIZE {
        return Err("Input exceeds maximum size of 64KB");
    }
    Ok(())
}

/// Validate a fixture's input or expected output text
pub fn validate_test_case_text(text: &str) -> Result<(), &'static str> {
    if text.len() > MAX_TEST_CASE_TEXT_SIZE {
        return Err("Test case text exceeds maximum size of 1MB");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_source_code() {
        assert!(validate_source_code("print(42)").is_ok());
        assert!(validate_source_code("").is_err());
        assert!(validate_source_code("   \n  ").is_err());
        assert!(validate_source_code(&"x".repeat(MAX_SOURCE_CODE_SIZE + 1)).is_err());
    }

    #[test]
    fn test_validate_stdin() {
        assert!(validate_stdin("").is_ok());
        assert!(validate_stdin(&"x".repeat(MAX_STDIN_SIZE + 1)).is_err());
    }

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  hello\x07 world  "), "hello world");
        assert_eq!(sanitize_string("line1\nline2"), "line1\nline2");
    }
}
