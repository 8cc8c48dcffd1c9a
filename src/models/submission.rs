//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Submission database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub submission_id: i32,
    pub practical_id: i32,
    pub student_id: i32,
    #[serde(skip_serializing)]
    pub code: String,
    pub language_id: i32,
    pub status: String,
    /// Only meaningful when status is `rejected`
    pub reject_reason: Option<String>,
    /// Only meaningful once the submission reaches a terminal status
    pub marks: i32,
    pub submitted_at: DateTime<Utc>,
    pub judged_at: Option<DateTime<Utc>>,
}

/// Submission status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Pending,
    Running,
    Accepted,
    Rejected,
}

impl SubmissionStatus {
    /// Get status as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "running" => Some(Self::Running),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Check if this is a terminal status (evaluation complete)
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }

    /// Check if this status means the submission was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a submission was rejected.
///
/// `Timeout` and `SystemError` let faculty distinguish "the code is wrong"
/// from "the system could not evaluate it".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    WrongAnswer,
    Timeout,
    SystemError,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongAnswer => "wrong_answer",
            Self::Timeout => "timeout",
            Self::SystemError => "system_error",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "wrong_answer" => Some(Self::WrongAnswer),
            "timeout" => Some(Self::Timeout),
            "system_error" => Some(Self::SystemError),
            _ => None,
        }
    }
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persisted per-case result for a submission
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SubmissionCaseResult {
    pub submission_id: i32,
    pub test_case_id: i32,
    pub verdict: String,
    pub actual_output: Option<String>,
    pub time_ms: Option<f64>,
    pub memory_kb: Option<i64>,
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for s in ["pending", "running", "accepted", "rejected"] {
            assert_eq!(SubmissionStatus::from_str(s).unwrap().as_str(), s);
        }
        assert!(SubmissionStatus::from_str("judging").is_none());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!SubmissionStatus::Pending.is_final());
        assert!(!SubmissionStatus::Running.is_final());
        assert!(SubmissionStatus::Accepted.is_final());
        assert!(SubmissionStatus::Rejected.is_final());
    }

    #[test]
    fn test_reject_reason_roundtrip() {
        for r in ["wrong_answer", "timeout", "system_error"] {
            assert_eq!(RejectReason::from_str(r).unwrap().as_str(), r);
        }
    }
}
