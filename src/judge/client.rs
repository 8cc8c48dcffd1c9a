//! Judge provider client
//!
//! The judge is an injected capability with exactly two operations:
//! submit one run, poll one token. Tests substitute a deterministic mock;
//! production uses the HTTP implementation below.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::JudgeConfig;

use super::types::{ProviderStatus, RunPoll, RunToken};

/// Errors from the judge provider
#[derive(Debug, Clone, thiserror::Error)]
pub enum JudgeError {
    /// Provider unreachable or answered with a server error
    #[error("judge unavailable: {0}")]
    Unavailable(String),

    /// Provider is rate limiting us; retry with backoff
    #[error("judge throttled the request")]
    Throttled,

    /// Provider rejected the language id
    #[error("judge does not support language id {0}")]
    InvalidLanguage(i32),

    /// Provider answered with a body we could not interpret
    #[error("malformed judge response: {0}")]
    Malformed(String),
}

/// External judge capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JudgeClient: Send + Sync {
    /// Submit one execution request (code + language + stdin).
    ///
    /// Returns a token to poll; retains no local state beyond it.
    async fn submit_run(
        &self,
        code: &str,
        judge_language_id: i32,
        stdin: &str,
    ) -> Result<RunToken, JudgeError>;

    /// Single non-blocking poll of a run. The caller owns retry
    /// scheduling.
    async fn poll_run(&self, token: &RunToken) -> Result<RunPoll, JudgeError>;
}

/// HTTP implementation over the provider's REST API
pub struct HttpJudgeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    source_code: &'a str,
    language_id: i32,
    stdin: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    token: String,
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    id: i32,
}

#[derive(Debug, Deserialize)]
struct PollBody {
    status: StatusBody,
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    /// Wall time in seconds, as a decimal string
    time: Option<String>,
    /// Peak memory in kilobytes
    memory: Option<i64>,
}

impl HttpJudgeClient {
    /// Build a client from configuration
    pub fn new(config: &JudgeConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("X-Auth-Token", key),
            None => builder,
        }
    }
}

#[async_trait]
impl JudgeClient for HttpJudgeClient {
    async fn submit_run(
        &self,
        code: &str,
        judge_language_id: i32,
        stdin: &str,
    ) -> Result<RunToken, JudgeError> {
        let url = format!(
            "{}/submissions?base64_encoded=false&wait=false",
            self.base_url
        );

        let response = self
            .request(self.http.post(&url))
            .json(&SubmitBody {
                source_code: code,
                language_id: judge_language_id,
                stdin,
            })
            .send()
            .await
            .map_err(|e| JudgeError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                let body: TokenBody = response
                    .json()
                    .await
                    .map_err(|e| JudgeError::Malformed(e.to_string()))?;
                Ok(RunToken(body.token))
            }
            StatusCode::TOO_MANY_REQUESTS => Err(JudgeError::Throttled),
            StatusCode::UNPROCESSABLE_ENTITY | StatusCode::BAD_REQUEST => {
                Err(JudgeError::InvalidLanguage(judge_language_id))
            }
            status => Err(JudgeError::Unavailable(format!(
                "unexpected status {} from judge",
                status
            ))),
        }
    }

    async fn poll_run(&self, token: &RunToken) -> Result<RunPoll, JudgeError> {
        let url = format!(
            "{}/submissions/{}?base64_encoded=false&fields=status,stdout,stderr,compile_output,time,memory",
            self.base_url, token
        );

        let response = self
            .request(self.http.get(&url))
            .send()
            .await
            .map_err(|e| JudgeError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::OK => {
                let body: PollBody = response
                    .json()
                    .await
                    .map_err(|e| JudgeError::Malformed(e.to_string()))?;

                let time_ms = match body.time.as_deref() {
                    Some(s) => Some(
                        s.parse::<f64>()
                            .map_err(|_| JudgeError::Malformed(format!("bad time value: {}", s)))?
                            * 1000.0,
                    ),
                    None => None,
                };

                Ok(RunPoll {
                    status: ProviderStatus::from_provider_id(body.status.id),
                    stdout: body.stdout,
                    stderr: body.stderr,
                    compile_output: body.compile_output,
                    time_ms,
                    memory_kb: body.memory,
                })
            }
            StatusCode::TOO_MANY_REQUESTS => Err(JudgeError::Throttled),
            StatusCode::NOT_FOUND => Err(JudgeError::Malformed(format!(
                "unknown run token {}",
                token
            ))),
            status => Err(JudgeError::Unavailable(format!(
                "unexpected status {} from judge",
                status
            ))),
        }
    }
}
