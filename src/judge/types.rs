//! Judge domain types
//!
//! Provider-side statuses and the orchestrator's per-case outcomes. The
//! provider's verdict is authoritative for pass/fail classification;
//! `CaseVerdict` extends it with the outcomes only the orchestrator can
//! produce (poll budget exhausted, provider unreachable).

use serde::{Deserialize, Serialize};

/// Opaque handle for one run submitted to the judge provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunToken(pub String);

impl std::fmt::Display for RunToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Execution status as reported by the judge provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderStatus {
    InQueue,
    Processing,
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    InternalError,
}

impl ProviderStatus {
    /// Map the provider's numeric status id to an internal status.
    ///
    /// Ids 7 through 12 are the provider's per-signal runtime error
    /// variants; they all collapse to `RuntimeError` here.
    pub fn from_provider_id(id: i32) -> Self {
        match id {
            1 => Self::InQueue,
            2 => Self::Processing,
            3 => Self::Accepted,
            4 => Self::WrongAnswer,
            5 => Self::TimeLimitExceeded,
            6 => Self::CompilationError,
            7..=12 | 14 => Self::RuntimeError,
            _ => Self::InternalError,
        }
    }

    /// Check if the run has finished (successfully or not)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::InQueue | Self::Processing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InQueue => "in_queue",
            Self::Processing => "processing",
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::TimeLimitExceeded => "time_limit_exceeded",
            Self::CompilationError => "compilation_error",
            Self::RuntimeError => "runtime_error",
            Self::InternalError => "internal_error",
        }
    }
}

/// One poll of a run: the provider's status plus whatever output and
/// resource usage it has reported so far.
#[derive(Debug, Clone)]
pub struct RunPoll {
    pub status: ProviderStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub time_ms: Option<f64>,
    pub memory_kb: Option<i64>,
}

/// Terminal verdict for one test case of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseVerdict {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompilationError,
    RuntimeError,
    /// The poll budget ran out before the provider resolved the run
    Timeout,
    /// The provider was unreachable or reported an internal failure
    SystemError,
}

impl CaseVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::WrongAnswer => "wrong_answer",
            Self::TimeLimitExceeded => "time_limit_exceeded",
            Self::CompilationError => "compilation_error",
            Self::RuntimeError => "runtime_error",
            Self::Timeout => "timeout",
            Self::SystemError => "system_error",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for CaseVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolved outcome of one test case, held in memory until aggregation
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub test_case_id: i32,
    pub verdict: CaseVerdict,
    pub stdout: Option<String>,
    pub time_ms: Option<f64>,
    pub memory_kb: Option<i64>,
    pub error_message: Option<String>,
}

impl CaseOutcome {
    pub fn is_accepted(&self) -> bool {
        self.verdict.is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_mapping() {
        assert_eq!(ProviderStatus::from_provider_id(1), ProviderStatus::InQueue);
        assert_eq!(ProviderStatus::from_provider_id(2), ProviderStatus::Processing);
        assert_eq!(ProviderStatus::from_provider_id(3), ProviderStatus::Accepted);
        assert_eq!(ProviderStatus::from_provider_id(4), ProviderStatus::WrongAnswer);
        assert_eq!(
            ProviderStatus::from_provider_id(5),
            ProviderStatus::TimeLimitExceeded
        );
        assert_eq!(
            ProviderStatus::from_provider_id(6),
            ProviderStatus::CompilationError
        );
        for id in 7..=12 {
            assert_eq!(ProviderStatus::from_provider_id(id), ProviderStatus::RuntimeError);
        }
        assert_eq!(ProviderStatus::from_provider_id(13), ProviderStatus::InternalError);
        assert_eq!(ProviderStatus::from_provider_id(99), ProviderStatus::InternalError);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!ProviderStatus::InQueue.is_terminal());
        assert!(!ProviderStatus::Processing.is_terminal());
        assert!(ProviderStatus::Accepted.is_terminal());
        assert!(ProviderStatus::WrongAnswer.is_terminal());
        assert!(ProviderStatus::InternalError.is_terminal());
    }
}
