//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

// =============================================================================
// EVALUATION DEFAULTS
// =============================================================================

/// Default interval between result polls, in seconds
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 5;

/// Default maximum polls per test case before the case is declared timed out
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 30;

/// Default retries for a throttled or unreachable judge call
pub const DEFAULT_JUDGE_RETRY_ATTEMPTS: u32 = 3;

/// Default base delay for judge retry backoff, in milliseconds
pub const DEFAULT_BACKOFF_BASE_MS: u64 = 500;

/// Default backoff cap, in milliseconds
pub const DEFAULT_BACKOFF_MAX_MS: u64 = 8_000;

/// Default request timeout for a single judge API call, in seconds
pub const DEFAULT_JUDGE_REQUEST_TIMEOUT_SECONDS: u64 = 15;

/// Default maximum marks when a practical does not specify one
pub const DEFAULT_MAX_MARKS: i32 = 100;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const STUDENT: &str = "student";
    pub const FACULTY: &str = "faculty";
    pub const HOD: &str = "hod";
    pub const ADMIN: &str = "admin";

    /// All user roles
    pub const ALL: &[&str] = &[STUDENT, FACULTY, HOD, ADMIN];

    /// Roles allowed to manage records and view hidden fixtures
    pub const STAFF: &[&str] = &[FACULTY, HOD, ADMIN];
}

// =============================================================================
// SUBMISSION STATUSES
// =============================================================================

/// Submission status values as stored in the database
pub mod statuses {
    pub const PENDING: &str = "pending";
    pub const RUNNING: &str = "running";
    pub const ACCEPTED: &str = "accepted";
    pub const REJECTED: &str = "rejected";
}

/// Rejection reason values (only meaningful for rejected submissions)
pub mod reject_reasons {
    pub const WRONG_ANSWER: &str = "wrong_answer";
    pub const TIMEOUT: &str = "timeout";
    pub const SYSTEM_ERROR: &str = "system_error";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Graded submission endpoint - max requests
    pub const SUBMIT_MAX_REQUESTS: i64 = 1;
    /// Graded submission endpoint - window in seconds
    pub const SUBMIT_WINDOW_SECS: i64 = 30;

    /// Ad hoc run endpoint - max requests
    pub const RUN_MAX_REQUESTS: i64 = 6;
    /// Ad hoc run endpoint - window in seconds
    pub const RUN_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for paginated results
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size for paginated results
pub const MAX_PAGE_SIZE: u32 = 100;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum submitted source code size in bytes (64 KB)
pub const MAX_SOURCE_CODE_SIZE: usize = 64 * 1024;

/// Maximum ad hoc stdin size in bytes
pub const MAX_STDIN_SIZE: usize = 64 * 1024;

/// Maximum test case input/expected output size in bytes (1 MB)
pub const MAX_TEST_CASE_TEXT_SIZE: usize = 1024 * 1024;

/// Maximum practical name length
pub const MAX_PRACTICAL_NAME_LENGTH: u64 = 256;

/// Maximum output preview length returned in case results
pub const MAX_OUTPUT_PREVIEW_LENGTH: usize = 1000;
