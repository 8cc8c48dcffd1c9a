//! Bounded polling of judge runs
//!
//! The polling loop is an explicit attempt counter with a terminal-state
//! check, never a recursive timeout. Throttled calls back off and retry
//! within the same budget; an exhausted budget is reported distinctly from
//! an unreachable provider so the aggregate verdict can tell them apart.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::config::EvaluationConfig;

use super::client::{JudgeClient, JudgeError};
use super::types::{RunPoll, RunToken};

/// How a bounded poll of one run ended
#[derive(Debug)]
pub enum PollResult {
    /// The provider reached a terminal status within the budget
    Finished(RunPoll),
    /// The attempt budget ran out while the run was still queued/processing
    BudgetExhausted,
    /// The provider failed in a way retries could not absorb
    Failed(JudgeError),
}

/// Calculate a capped exponential backoff delay with jitter.
///
/// `min(base_ms * 2^(attempt-1) + jitter, max_ms)`, 0-25% jitter.
pub fn retry_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::ZERO;
    }

    let exp_factor = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exp_factor);

    let jitter = if delay_ms > 0 {
        rand::rng().random_range(0..=delay_ms / 4)
    } else {
        0
    };

    Duration::from_millis(delay_ms.saturating_add(jitter).min(max_ms))
}

/// Submit one run, absorbing transient provider failures.
///
/// Throttled and unreachable responses are retried with backoff up to the
/// configured attempt count; anything else is returned immediately.
pub async fn submit_with_retry(
    client: &dyn JudgeClient,
    code: &str,
    judge_language_id: i32,
    stdin: &str,
    config: &EvaluationConfig,
) -> Result<RunToken, JudgeError> {
    let mut attempt = 0u32;

    loop {
        match client.submit_run(code, judge_language_id, stdin).await {
            Ok(token) => return Ok(token),
            Err(err) if matches!(err, JudgeError::Throttled | JudgeError::Unavailable(_)) => {
                attempt += 1;
                if attempt > config.judge_retry_attempts {
                    return Err(err);
                }
                let delay = retry_backoff(attempt, config.backoff_base_ms, config.backoff_max_ms);
                tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "retrying judge submit");
                sleep(delay).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Poll one run until it reaches a terminal status or the budget expires.
///
/// Each poll (including throttled ones) consumes one attempt, so the
/// total wall time is bounded by `max_poll_attempts` regardless of how
/// the provider misbehaves.
pub async fn poll_until_terminal(
    client: &dyn JudgeClient,
    token: &RunToken,
    config: &EvaluationConfig,
) -> PollResult {
    let interval = Duration::from_secs(config.poll_interval_seconds);
    let mut upstream_failures = 0u32;

    for _attempt in 0..config.max_poll_attempts {
        match client.poll_run(token).await {
            Ok(poll) if poll.status.is_terminal() => return PollResult::Finished(poll),
            Ok(_) => {
                upstream_failures = 0;
                sleep(interval).await;
            }
            Err(JudgeError::Throttled) => {
                sleep(retry_backoff(1, config.backoff_base_ms, config.backoff_max_ms)).await;
            }
            Err(err @ JudgeError::Unavailable(_)) => {
                upstream_failures += 1;
                if upstream_failures > config.judge_retry_attempts {
                    return PollResult::Failed(err);
                }
                sleep(retry_backoff(
                    upstream_failures,
                    config.backoff_base_ms,
                    config.backoff_max_ms,
                ))
                .await;
            }
            Err(err) => return PollResult::Failed(err),
        }
    }

    PollResult::BudgetExhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::client::MockJudgeClient;
    use crate::judge::types::ProviderStatus;
    use crate::judge::verdict::ScoringPolicy;

    fn fast_config(max_poll_attempts: u32, judge_retry_attempts: u32) -> EvaluationConfig {
        EvaluationConfig {
            poll_interval_seconds: 0,
            max_poll_attempts,
            judge_retry_attempts,
            backoff_base_ms: 0,
            backoff_max_ms: 0,
            scoring_policy: ScoringPolicy::Proportional,
        }
    }

    fn queued_poll() -> RunPoll {
        RunPoll {
            status: ProviderStatus::InQueue,
            stdout: None,
            stderr: None,
            compile_output: None,
            time_ms: None,
            memory_kb: None,
        }
    }

    fn accepted_poll() -> RunPoll {
        RunPoll {
            status: ProviderStatus::Accepted,
            stdout: Some("42\n".to_string()),
            stderr: None,
            compile_output: None,
            time_ms: Some(12.0),
            memory_kb: Some(1024),
        }
    }

    #[test]
    fn test_retry_backoff_growth() {
        let d1 = retry_backoff(1, 1000, 60_000);
        assert!(d1.as_millis() >= 1000 && d1.as_millis() <= 1250);

        let d2 = retry_backoff(2, 1000, 60_000);
        assert!(d2.as_millis() >= 2000 && d2.as_millis() <= 2500);

        let d3 = retry_backoff(3, 1000, 60_000);
        assert!(d3.as_millis() >= 4000 && d3.as_millis() <= 5000);
    }

    #[test]
    fn test_retry_backoff_respects_cap() {
        let d = retry_backoff(10, 10_000, 60_000);
        assert!(d.as_millis() <= 60_000);
    }

    #[test]
    fn test_retry_backoff_zero_attempt() {
        assert_eq!(retry_backoff(0, 1000, 60_000), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_poll_resolves_after_queueing() {
        let mut judge = MockJudgeClient::new();
        let mut polls = 0;
        judge.expect_poll_run().times(3).returning(move |_| {
            polls += 1;
            if polls < 3 {
                Ok(queued_poll())
            } else {
                Ok(accepted_poll())
            }
        });

        let config = fast_config(10, 3);
        let token = RunToken("t-1".to_string());
        match poll_until_terminal(&judge, &token, &config).await {
            PollResult::Finished(poll) => assert_eq!(poll.status, ProviderStatus::Accepted),
            other => panic!("expected Finished, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_poll_budget_exhaustion() {
        let mut judge = MockJudgeClient::new();
        judge.expect_poll_run().times(4).returning(|_| Ok(queued_poll()));

        let config = fast_config(4, 3);
        let token = RunToken("t-2".to_string());
        assert!(matches!(
            poll_until_terminal(&judge, &token, &config).await,
            PollResult::BudgetExhausted
        ));
    }

    #[tokio::test]
    async fn test_poll_gives_up_after_consecutive_unavailability() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_poll_run()
            .times(3)
            .returning(|_| Err(JudgeError::Unavailable("connection refused".to_string())));

        let config = fast_config(30, 2);
        let token = RunToken("t-3".to_string());
        assert!(matches!(
            poll_until_terminal(&judge, &token, &config).await,
            PollResult::Failed(JudgeError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_throttled_polls_stay_within_budget() {
        let mut judge = MockJudgeClient::new();
        judge.expect_poll_run().times(5).returning(|_| Err(JudgeError::Throttled));

        let config = fast_config(5, 3);
        let token = RunToken("t-4".to_string());
        // Throttling forever must not spin: the attempt budget still bounds it
        assert!(matches!(
            poll_until_terminal(&judge, &token, &config).await,
            PollResult::BudgetExhausted
        ));
    }

    #[tokio::test]
    async fn test_submit_retries_throttle_then_succeeds() {
        let mut judge = MockJudgeClient::new();
        let mut calls = 0;
        judge.expect_submit_run().times(2).returning(move |_, _, _| {
            calls += 1;
            if calls == 1 {
                Err(JudgeError::Throttled)
            } else {
                Ok(RunToken("t-5".to_string()))
            }
        });

        let config = fast_config(10, 3);
        let token = submit_with_retry(&judge, "code", 71, "", &config).await.unwrap();
        assert_eq!(token, RunToken("t-5".to_string()));
    }

    #[tokio::test]
    async fn test_submit_surfaces_exhausted_unavailability() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit_run()
            .times(3)
            .returning(|_, _, _| Err(JudgeError::Unavailable("down".to_string())));

        let config = fast_config(10, 2);
        let result = submit_with_retry(&judge, "code", 71, "", &config).await;
        assert!(matches!(result, Err(JudgeError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_submit_does_not_retry_invalid_language() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit_run()
            .times(1)
            .returning(|_, _, _| Err(JudgeError::InvalidLanguage(999)));

        let config = fast_config(10, 3);
        let result = submit_with_retry(&judge, "code", 999, "", &config).await;
        assert!(matches!(result, Err(JudgeError::InvalidLanguage(999))));
    }
}
