//! Evaluation orchestrator
//!
//! Runs one submission against every fixture of its practical through the
//! judge provider, aggregates the per-case outcomes into a verdict and
//! marks, and persists the result. Each submission is evaluated in its own
//! spawned task; nothing here is shared mutable state across submissions.

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use serde::Serialize;
use sqlx::PgPool;

use crate::{
    config::EvaluationConfig,
    db::repositories::{LanguageRepository, PracticalRepository, SubmissionRepository},
    error::{AppError, AppResult},
    models::{RejectReason, SubmissionStatus, TestCase},
    utils::time::format_milliseconds,
};

use super::{
    client::{JudgeClient, JudgeError},
    poller::{poll_until_terminal, submit_with_retry, PollResult},
    types::{CaseOutcome, CaseVerdict, ProviderStatus, RunPoll},
    verdict::{aggregate, outputs_match, Aggregate},
};

/// Result of an ungraded ad hoc run
#[derive(Debug, Serialize)]
pub struct AdhocRun {
    pub output: String,
    pub status: String,
    pub time_ms: Option<f64>,
    pub memory_kb: Option<i64>,
}

/// Orchestrates submission evaluation against the judge provider
pub struct EvaluationRunner {
    pool: PgPool,
    judge: Arc<dyn JudgeClient>,
    evaluation: EvaluationConfig,
}

impl EvaluationRunner {
    pub fn new(pool: PgPool, judge: Arc<dyn JudgeClient>, evaluation: EvaluationConfig) -> Self {
        Self {
            pool,
            judge,
            evaluation,
        }
    }

    /// Evaluate a submission in a background task.
    ///
    /// The task owns the submission end to end; failures are folded into
    /// the submission record so it can never stay pending forever.
    pub fn spawn_evaluation(self: Arc<Self>, submission_id: i32) {
        let runner = self;

        tokio::spawn(async move {
            if let Err(e) = runner.evaluate_submission(submission_id).await {
                tracing::error!(submission_id, error = %e, "Evaluation failed");

                let _ = SubmissionRepository::update_result(
                    &runner.pool,
                    submission_id,
                    SubmissionStatus::Rejected.as_str(),
                    Some(RejectReason::SystemError.as_str()),
                    0,
                )
                .await;
            }
        });
    }

    /// Run the full evaluation pipeline for one submission
    pub async fn evaluate_submission(&self, submission_id: i32) -> AppResult<()> {
        let started = Instant::now();

        let submission = SubmissionRepository::find_by_id(&self.pool, submission_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

        let practical = PracticalRepository::find_by_id(&self.pool, submission.practical_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Practical not found".to_string()))?;

        let language = LanguageRepository::find_by_id(&self.pool, submission.language_id)
            .await?
            .ok_or(AppError::InvalidLanguage(submission.language_id))?;

        let test_cases =
            PracticalRepository::test_cases(&self.pool, submission.practical_id).await?;

        SubmissionRepository::update_status(
            &self.pool,
            submission_id,
            SubmissionStatus::Running.as_str(),
        )
        .await?;

        tracing::info!(
            submission_id,
            practical_id = submission.practical_id,
            cases = test_cases.len(),
            "Dispatching submission to judge"
        );

        let outcomes = join_all(test_cases.iter().map(|tc| {
            self.run_case(submission_id, &submission.code, language.judge_language_id, tc)
        }))
        .await;

        let result = aggregate(&outcomes, practical.max_marks, self.evaluation.scoring_policy);

        self.persist_final(submission_id, &result).await?;

        tracing::info!(
            submission_id,
            status = %result.status,
            marks = result.marks,
            elapsed = %format_milliseconds(started.elapsed().as_millis() as i64),
            "Evaluation complete"
        );

        Ok(())
    }

    /// Run one test case and record its result as soon as it resolves,
    /// so partial results are visible to status polling mid-evaluation.
    async fn run_case(
        &self,
        submission_id: i32,
        code: &str,
        judge_language_id: i32,
        test_case: &TestCase,
    ) -> CaseOutcome {
        let outcome =
            run_case_against_judge(self.judge.as_ref(), &self.evaluation, code, judge_language_id, test_case)
                .await;

        if let Err(e) = SubmissionRepository::upsert_case_result(
            &self.pool,
            submission_id,
            outcome.test_case_id,
            outcome.verdict.as_str(),
            outcome.stdout.as_deref(),
            outcome.time_ms,
            outcome.memory_kb,
            outcome.error_message.as_deref(),
        )
        .await
        {
            tracing::warn!(
                submission_id,
                test_case_id = outcome.test_case_id,
                error = %e,
                "Failed to record case result"
            );
        }

        outcome
    }

    /// Write the final status and marks, retrying once.
    ///
    /// Losing a grading result is worse than a slow response.
    async fn persist_final(&self, submission_id: i32, result: &Aggregate) -> AppResult<()> {
        let reason = result.reject_reason.map(|r| r.as_str());

        let first = SubmissionRepository::update_result(
            &self.pool,
            submission_id,
            result.status.as_str(),
            reason,
            result.marks,
        )
        .await;

        match first {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::warn!(submission_id, error = %e, "Final result write failed, retrying");

                SubmissionRepository::update_result(
                    &self.pool,
                    submission_id,
                    result.status.as_str(),
                    reason,
                    result.marks,
                )
                .await
                .map(|_| ())
                .map_err(|e| AppError::Persistence(e.to_string()))
            }
        }
    }

    /// Ungraded ad hoc execution: one run against caller-provided stdin.
    ///
    /// Touches neither the submission store nor the fixtures.
    pub async fn run_adhoc(
        &self,
        code: &str,
        judge_language_id: i32,
        stdin: &str,
    ) -> AppResult<AdhocRun> {
        let token = submit_with_retry(
            self.judge.as_ref(),
            code,
            judge_language_id,
            stdin,
            &self.evaluation,
        )
        .await
        .map_err(judge_error)?;

        match poll_until_terminal(self.judge.as_ref(), &token, &self.evaluation).await {
            PollResult::Finished(poll) => {
                let output = poll
                    .stdout
                    .or(poll.compile_output)
                    .or(poll.stderr)
                    .unwrap_or_default();

                Ok(AdhocRun {
                    output,
                    status: poll.status.as_str().to_string(),
                    time_ms: poll.time_ms,
                    memory_kb: poll.memory_kb,
                })
            }
            PollResult::BudgetExhausted => Err(AppError::EvaluationTimeout),
            PollResult::Failed(e) => Err(judge_error(e)),
        }
    }
}

/// Map a provider error to the application taxonomy
fn judge_error(err: JudgeError) -> AppError {
    match err {
        JudgeError::Throttled => AppError::JudgeThrottled,
        JudgeError::InvalidLanguage(id) => AppError::InvalidLanguage(id),
        JudgeError::Unavailable(msg) | JudgeError::Malformed(msg) => {
            AppError::JudgeUnavailable(msg)
        }
    }
}

/// Run one fixture through the judge: submit, poll to a terminal state,
/// resolve a verdict. Provider failures resolve the case as `SystemError`
/// rather than blocking the rest of the aggregation.
pub(crate) async fn run_case_against_judge(
    judge: &dyn JudgeClient,
    config: &EvaluationConfig,
    code: &str,
    judge_language_id: i32,
    test_case: &TestCase,
) -> CaseOutcome {
    let token = match submit_with_retry(judge, code, judge_language_id, test_case.input.as_str(), config).await
    {
        Ok(token) => token,
        Err(e) => {
            return CaseOutcome {
                test_case_id: test_case.test_case_id,
                verdict: CaseVerdict::SystemError,
                stdout: None,
                time_ms: None,
                memory_kb: None,
                error_message: Some(e.to_string()),
            };
        }
    };

    match poll_until_terminal(judge, &token, config).await {
        PollResult::Finished(poll) => resolve_case(test_case, poll),
        PollResult::BudgetExhausted => CaseOutcome {
            test_case_id: test_case.test_case_id,
            verdict: CaseVerdict::Timeout,
            stdout: None,
            time_ms: None,
            memory_kb: None,
            error_message: Some("poll budget exhausted before the run resolved".to_string()),
        },
        PollResult::Failed(e) => CaseOutcome {
            test_case_id: test_case.test_case_id,
            verdict: CaseVerdict::SystemError,
            stdout: None,
            time_ms: None,
            memory_kb: None,
            error_message: Some(e.to_string()),
        },
    }
}

/// Resolve a terminal poll into a per-case verdict.
///
/// The provider verdict is authoritative: runtime and compile failures
/// must stay distinguishable from a wrong answer. A provider-accepted run
/// is additionally checked against the expected output.
fn resolve_case(test_case: &TestCase, poll: RunPoll) -> CaseOutcome {
    let stdout = poll.stdout.clone();

    let (verdict, error_message) = match poll.status {
        ProviderStatus::Accepted => {
            let actual = stdout.as_deref().unwrap_or("");
            if outputs_match(actual, &test_case.expected_output) {
                (CaseVerdict::Accepted, None)
            } else {
                (CaseVerdict::WrongAnswer, None)
            }
        }
        ProviderStatus::WrongAnswer => (CaseVerdict::WrongAnswer, None),
        ProviderStatus::TimeLimitExceeded => (CaseVerdict::TimeLimitExceeded, None),
        ProviderStatus::CompilationError => (CaseVerdict::CompilationError, poll.compile_output),
        ProviderStatus::RuntimeError => (CaseVerdict::RuntimeError, poll.stderr),
        ProviderStatus::InternalError => {
            (CaseVerdict::SystemError, Some("judge internal error".to_string()))
        }
        // poll_until_terminal never hands these over
        ProviderStatus::InQueue | ProviderStatus::Processing => {
            (CaseVerdict::SystemError, Some("non-terminal status at resolution".to_string()))
        }
    };

    CaseOutcome {
        test_case_id: test_case.test_case_id,
        verdict,
        stdout,
        time_ms: poll.time_ms,
        memory_kb: poll.memory_kb,
        error_message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use futures::future::join_all;

    use crate::judge::client::MockJudgeClient;
    use crate::judge::types::RunToken;
    use crate::judge::verdict::ScoringPolicy;
    use crate::models::{check_access, AccessBlock, BatchPracticalAccess};

    fn fast_config() -> EvaluationConfig {
        EvaluationConfig {
            poll_interval_seconds: 0,
            max_poll_attempts: 5,
            judge_retry_attempts: 1,
            backoff_base_ms: 0,
            backoff_max_ms: 0,
            scoring_policy: ScoringPolicy::Proportional,
        }
    }

    fn test_case(id: i32, input: &str, expected: &str) -> TestCase {
        TestCase {
            test_case_id: id,
            practical_id: 1,
            input: input.to_string(),
            expected_output: expected.to_string(),
            is_public: true,
        }
    }

    fn terminal_poll(status: ProviderStatus, stdout: Option<&str>) -> RunPoll {
        RunPoll {
            status,
            stdout: stdout.map(str::to_string),
            stderr: None,
            compile_output: None,
            time_ms: Some(10.0),
            memory_kb: Some(2048),
        }
    }

    async fn evaluate_cases(
        judge: &dyn JudgeClient,
        config: &EvaluationConfig,
        cases: &[TestCase],
    ) -> Vec<CaseOutcome> {
        join_all(
            cases
                .iter()
                .map(|tc| run_case_against_judge(judge, config, "print(42)", 71, tc)),
        )
        .await
    }

    #[tokio::test]
    async fn test_all_cases_accepted_aggregates_to_accepted() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit_run()
            .times(3)
            .returning(|_, _, stdin| Ok(RunToken(format!("tok-{}", stdin.trim()))));
        judge
            .expect_poll_run()
            .times(3)
            .returning(|_| Ok(terminal_poll(ProviderStatus::Accepted, Some("42\n"))));

        let cases = vec![
            test_case(1, "1", "42"),
            test_case(2, "2", "42"),
            test_case(3, "3", "42"),
        ];

        let outcomes = evaluate_cases(&judge, &fast_config(), &cases).await;
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);

        assert_eq!(agg.status, SubmissionStatus::Accepted);
        assert_eq!(agg.marks, 100);
    }

    #[tokio::test]
    async fn test_partial_failure_aggregates_to_rejected() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit_run()
            .times(3)
            .returning(|_, _, stdin| Ok(RunToken(stdin.trim().to_string())));
        judge.expect_poll_run().times(3).returning(|token| {
            if token.0 == "2" {
                Ok(terminal_poll(ProviderStatus::WrongAnswer, Some("41\n")))
            } else {
                Ok(terminal_poll(ProviderStatus::Accepted, Some("42\n")))
            }
        });

        let cases = vec![
            test_case(1, "1", "42"),
            test_case(2, "2", "42"),
            test_case(3, "3", "42"),
        ];

        let outcomes = evaluate_cases(&judge, &fast_config(), &cases).await;
        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);

        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::WrongAnswer));
        assert_eq!(agg.marks, 66);
    }

    #[tokio::test]
    async fn test_total_outage_flags_system_error() {
        let mut judge = MockJudgeClient::new();
        // 3 cases x (1 try + 1 retry); never reachable
        judge
            .expect_submit_run()
            .times(6)
            .returning(|_, _, _| Err(JudgeError::Unavailable("connection refused".to_string())));

        let cases = vec![
            test_case(1, "1", "42"),
            test_case(2, "2", "42"),
            test_case(3, "3", "42"),
        ];

        let outcomes = evaluate_cases(&judge, &fast_config(), &cases).await;
        assert!(outcomes.iter().all(|o| o.verdict == CaseVerdict::SystemError));

        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::SystemError));
    }

    #[tokio::test]
    async fn test_unresolved_case_times_out_the_submission() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit_run()
            .times(1)
            .returning(|_, _, _| Ok(RunToken("tok".to_string())));
        judge
            .expect_poll_run()
            .returning(|_| Ok(terminal_poll(ProviderStatus::InQueue, None)));

        let cases = vec![test_case(1, "1", "42")];
        let outcomes = evaluate_cases(&judge, &fast_config(), &cases).await;

        assert_eq!(outcomes[0].verdict, CaseVerdict::Timeout);

        let agg = aggregate(&outcomes, 100, ScoringPolicy::Proportional);
        assert_eq!(agg.status, SubmissionStatus::Rejected);
        assert_eq!(agg.reject_reason, Some(RejectReason::Timeout));
    }

    #[tokio::test]
    async fn test_locked_practical_makes_no_judge_calls() {
        let mut judge = MockJudgeClient::new();
        judge.expect_submit_run().times(0);
        judge.expect_poll_run().times(0);

        let access = BatchPracticalAccess {
            practical_id: 1,
            batch_id: 1,
            locked: true,
            deadline: None,
        };

        // Mirror the submission flow: the gate runs before any dispatch
        let gate = check_access(Some(&access), Utc::now());
        assert_eq!(gate, Err(AccessBlock::Locked));

        if gate.is_ok() {
            let cases = vec![test_case(1, "1", "42")];
            evaluate_cases(&judge, &fast_config(), &cases).await;
        }
        // MockJudgeClient verifies the zero call count on drop
    }

    #[tokio::test]
    async fn test_provider_accepted_but_output_mismatch_is_wrong_answer() {
        let poll = terminal_poll(ProviderStatus::Accepted, Some("nope\n"));
        let tc = test_case(7, "in", "42");
        let outcome = resolve_case(&tc, poll);
        assert_eq!(outcome.verdict, CaseVerdict::WrongAnswer);
    }

    #[tokio::test]
    async fn test_compile_error_keeps_compiler_output() {
        let poll = RunPoll {
            status: ProviderStatus::CompilationError,
            stdout: None,
            stderr: None,
            compile_output: Some("expected `;`".to_string()),
            time_ms: None,
            memory_kb: None,
        };
        let outcome = resolve_case(&test_case(1, "", ""), poll);
        assert_eq!(outcome.verdict, CaseVerdict::CompilationError);
        assert_eq!(outcome.error_message.as_deref(), Some("expected `;`"));
    }

    #[tokio::test]
    async fn test_adhoc_timeout_surfaces_distinctly() {
        let mut judge = MockJudgeClient::new();
        judge
            .expect_submit_run()
            .times(1)
            .returning(|_, _, _| Ok(RunToken("tok".to_string())));
        judge
            .expect_poll_run()
            .returning(|_| Ok(terminal_poll(ProviderStatus::Processing, None)));

        // run_adhoc needs a runner; exercise the poll path directly
        let config = fast_config();
        let token = RunToken("tok".to_string());
        let _ = judge.submit_run("code", 71, "").await.unwrap();
        assert!(matches!(
            poll_until_terminal(&judge, &token, &config).await,
            PollResult::BudgetExhausted
        ));
    }
}
