//! Verdict aggregation
//!
//! Per-case outcomes are reduced as an unordered set to an overall status
//! and marks. Everything here is pure so the grading rules are testable
//! with injected results and no network or database.

use std::str::FromStr;

use crate::models::{RejectReason, SubmissionStatus};

use super::types::{CaseOutcome, CaseVerdict};

/// How marks are derived from per-case results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// accepted cases / total cases, scaled to max marks
    Proportional,
    /// Full marks only when every case is accepted
    AllOrNothing,
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proportional" => Ok(Self::Proportional),
            "all_or_nothing" => Ok(Self::AllOrNothing),
            other => Err(format!("unknown scoring policy: {}", other)),
        }
    }
}

/// Aggregate verdict for a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub status: SubmissionStatus,
    pub reject_reason: Option<RejectReason>,
    pub marks: i32,
}

/// Reduce a set of case outcomes to the overall verdict and marks.
///
/// Accepted only when every case is accepted. A rejection caused purely by
/// provider failures is reported as `SystemError` (systemic outage) and a
/// rejection with an exhausted poll budget as `Timeout`; both must stay
/// distinguishable from an ordinary wrong answer.
pub fn aggregate(outcomes: &[CaseOutcome], max_marks: i32, policy: ScoringPolicy) -> Aggregate {
    if outcomes.is_empty() {
        return Aggregate {
            status: SubmissionStatus::Rejected,
            reject_reason: Some(RejectReason::SystemError),
            marks: 0,
        };
    }

    let total = outcomes.len() as i64;
    let accepted = outcomes.iter().filter(|o| o.is_accepted()).count() as i64;

    if accepted == total {
        return Aggregate {
            status: SubmissionStatus::Accepted,
            reject_reason: None,
            marks: max_marks.max(0),
        };
    }

    let reject_reason = if outcomes
        .iter()
        .all(|o| o.verdict == CaseVerdict::SystemError)
    {
        RejectReason::SystemError
    } else if outcomes.iter().any(|o| o.verdict == CaseVerdict::Timeout) {
        RejectReason::Timeout
    } else {
        RejectReason::WrongAnswer
    };

    let marks = match policy {
        ScoringPolicy::Proportional => {
            ((accepted * max_marks.max(0) as i64) / total) as i32
        }
        ScoringPolicy::AllOrNothing => 0,
    };

    Aggregate {
        status: SubmissionStatus::Rejected,
        reject_reason: Some(reject_reason),
        marks,
    }
}

/// Compare actual output against expected output.
///
/// Exact string equality after normalizing line endings and trailing
/// whitespace (per line and at the end of the text).
pub fn outputs_match(actual: &str, expected: &str) -> bool {
    normalize_output(actual) == normalize_output(expected)
}

fn normalize_output(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(id: i32, verdict: CaseVerdict) -> CaseOutcome {
        CaseOutcome {
            test_case_id: id,
            verdict,
            stdout: None,
            time_ms: None,
            memory_kb: None,
            error_message: None,
        }
    }

    #[test]
    fn test_all_accepted_gives_full_marks() {
        let outcomes = vec![
            outcome(1, CaseVerdict::Accepted),
            outcome(2, CaseVerdict::Accepted),
            outcome(3, CaseVerdict::Accepted),
        ];
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Accepted);
        assert_eq!(agg.reject_reason, None);
        assert_eq!(agg.marks, 100);
    }

    #[test]
    fn test_partial_failure_proportional_marks() {
        let outcomes = vec![
            outcome(1, CaseVerdict::Accepted),
            outcome(2, CaseVerdict::WrongAnswer),
            outcome(3, CaseVerdict::Accepted),
        ];
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::WrongAnswer));
        assert_eq!(agg.marks, 66);
    }

    #[test]
    fn test_partial_failure_all_or_nothing() {
        let outcomes = vec![
            outcome(1, CaseVerdict::Accepted),
            outcome(2, CaseVerdict::WrongAnswer),
            outcome(3, CaseVerdict::Accepted),
        ];
        let agg = aggregate(&outcomes, 100, ScoringPolicy::AllOrNothing);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.marks, 0);
    }

    #[test]
    fn test_systemic_outage_distinct_from_wrong_answer() {
        let outcomes = vec![
            outcome(1, CaseVerdict::SystemError),
            outcome(2, CaseVerdict::SystemError),
            outcome(3, CaseVerdict::SystemError),
        ];
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::SystemError));
        assert_eq!(agg.marks, 0);
    }

    #[test]
    fn test_single_upstream_failure_is_not_an_outage() {
        // One unreachable case fails that case, but the submission is an
        // ordinary rejection as long as other cases resolved
        let outcomes = vec![
            outcome(1, CaseVerdict::Accepted),
            outcome(2, CaseVerdict::SystemError),
        ];
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.reject_reason, Some(RejectReason::WrongAnswer));
        assert_eq!(agg.marks, 50);
    }

    #[test]
    fn test_timeout_reason_survives_aggregation() {
        let outcomes = vec![
            outcome(1, CaseVerdict::Accepted),
            outcome(2, CaseVerdict::Timeout),
        ];
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::Timeout));
    }

    #[test]
    fn test_empty_outcomes_reject_as_system_error() {
        let agg = aggregate(&[], 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::SystemError));
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let mut outcomes = vec![
            outcome(1, CaseVerdict::Accepted),
            outcome(2, CaseVerdict::WrongAnswer),
            outcome(3, CaseVerdict::Accepted),
        ];
        let forward = aggregate(&outcomes, 90, ScoringPolicy::Proportional);
        outcomes.reverse();
        let backward = aggregate(&outcomes, 90, ScoringPolicy::Proportional);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_outputs_match_ignores_trailing_whitespace() {
        assert!(outputs_match("1 2 3\n", "1 2 3"));
        assert!(outputs_match("1 2 3  \n4 5\n\n", "1 2 3\n4 5"));
        assert!(outputs_match("a\r\nb\r\n", "a\nb"));
        assert!(!outputs_match("1 2 3", "1 2 4"));
        assert!(!outputs_match("a\nb", "a\n b"));
    }

    #[test]
    fn test_scoring_policy_from_str() {
        assert_eq!(
            "proportional".parse::<ScoringPolicy>().unwrap(),
            ScoringPolicy::Proportional
        );
        assert_eq!(
            "all_or_nothing".parse::<ScoringPolicy>().unwrap(),
            ScoringPolicy::AllOrNothing
        );
        assert!("half".parse::<ScoringPolicy>().is_err());
    }
}
