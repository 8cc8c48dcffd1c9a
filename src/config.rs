//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_BACKOFF_BASE_MS, DEFAULT_BACKOFF_MAX_MS, DEFAULT_DATABASE_MAX_CONNECTIONS,
    DEFAULT_JUDGE_REQUEST_TIMEOUT_SECONDS, DEFAULT_JUDGE_RETRY_ATTEMPTS,
    DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_SECONDS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::judge::verdict::ScoringPolicy;

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub judge: JudgeConfig,
    pub evaluation: EvaluationConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// JWT authentication configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
}

/// External judge service configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Base URL of the judge provider API
    pub base_url: String,
    /// Optional API key sent with every request
    pub api_key: Option<String>,
    /// Timeout for a single HTTP call to the provider
    pub request_timeout_seconds: u64,
}

/// Evaluation orchestration configuration
#[derive(Debug, Clone)]
pub struct EvaluationConfig {
    /// Seconds to wait between polls of an unfinished run
    pub poll_interval_seconds: u64,
    /// Polls per test case before the case is declared timed out
    pub max_poll_attempts: u32,
    /// Retries for a throttled or unreachable judge call
    pub judge_retry_attempts: u32,
    /// Base delay for retry backoff, in milliseconds
    pub backoff_base_ms: u64,
    /// Backoff cap, in milliseconds
    pub backoff_max_ms: u64,
    /// How marks are derived from per-case results
    pub scoring_policy: ScoringPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            redis: RedisConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            judge: JudgeConfig::from_env()?,
            evaluation: EvaluationConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        })
    }
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET".to_string()))?,
            expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .unwrap_or_else(|_| DEFAULT_JWT_EXPIRY_HOURS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JWT_EXPIRY_HOURS".to_string()))?,
        })
    }
}

impl JudgeConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("JUDGE_BASE_URL")
                .map_err(|_| ConfigError::Missing("JUDGE_BASE_URL".to_string()))?
                .trim_end_matches('/')
                .to_string(),
            api_key: env::var("JUDGE_API_KEY").ok().filter(|k| !k.is_empty()),
            request_timeout_seconds: env::var("JUDGE_REQUEST_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_REQUEST_TIMEOUT_SECONDS.to_string())
                .parse()
                .map_err(|_| {
                    ConfigError::InvalidValue("JUDGE_REQUEST_TIMEOUT_SECONDS".to_string())
                })?,
        })
    }
}

impl EvaluationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let scoring_policy = env::var("SCORING_POLICY")
            .unwrap_or_else(|_| "proportional".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("SCORING_POLICY".to_string()))?;

        Ok(Self {
            poll_interval_seconds: env::var("POLL_INTERVAL_SECONDS")
                .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_SECONDS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POLL_INTERVAL_SECONDS".to_string()))?,
            max_poll_attempts: env::var("MAX_POLL_ATTEMPTS")
                .unwrap_or_else(|_| DEFAULT_MAX_POLL_ATTEMPTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MAX_POLL_ATTEMPTS".to_string()))?,
            judge_retry_attempts: env::var("JUDGE_RETRY_ATTEMPTS")
                .unwrap_or_else(|_| DEFAULT_JUDGE_RETRY_ATTEMPTS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("JUDGE_RETRY_ATTEMPTS".to_string()))?,
            backoff_base_ms: env::var("BACKOFF_BASE_MS")
                .unwrap_or_else(|_| DEFAULT_BACKOFF_BASE_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BACKOFF_BASE_MS".to_string()))?,
            backoff_max_ms: env::var("BACKOFF_MAX_MS")
                .unwrap_or_else(|_| DEFAULT_BACKOFF_MAX_MS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BACKOFF_MAX_MS".to_string()))?,
            scoring_policy,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let server = ServerConfig {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            rust_log: "info".to_string(),
        };
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 8080);
    }

    #[test]
    fn test_evaluation_defaults_bound_the_poll_budget() {
        // 30 attempts x 5 seconds keeps the worst case evaluation around 150s
        assert_eq!(DEFAULT_MAX_POLL_ATTEMPTS, 30);
        assert_eq!(DEFAULT_POLL_INTERVAL_SECONDS, 5);
    }
}
