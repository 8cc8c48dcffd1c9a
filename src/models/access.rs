//! Batch practical access model and the access gate check

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Per-(practical, batch) submission gate set by faculty.
///
/// Read-only on the evaluation path; the gate is evaluated once at
/// submission time and never re-checked mid-evaluation.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BatchPracticalAccess {
    pub practical_id: i32,
    pub batch_id: i32,
    pub locked: bool,
    pub deadline: Option<DateTime<Utc>>,
}

/// Why the access gate blocked a submission.
///
/// Lock and deadline are independent conditions and are reported
/// distinctly so the client can render an appropriate message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessBlock {
    Locked,
    DeadlinePassed,
}

/// Check whether a batch may submit for a practical at `now`.
///
/// A missing access row means the practical is unrestricted for the batch.
pub fn check_access(
    access: Option<&BatchPracticalAccess>,
    now: DateTime<Utc>,
) -> Result<(), AccessBlock> {
    let Some(access) = access else {
        return Ok(());
    };

    if access.locked {
        return Err(AccessBlock::Locked);
    }

    if let Some(deadline) = access.deadline {
        if now > deadline {
            return Err(AccessBlock::DeadlinePassed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn access(locked: bool, deadline: Option<DateTime<Utc>>) -> BatchPracticalAccess {
        BatchPracticalAccess {
            practical_id: 1,
            batch_id: 1,
            locked,
            deadline,
        }
    }

    #[test]
    fn test_missing_row_is_unrestricted() {
        assert!(check_access(None, Utc::now()).is_ok());
    }

    #[test]
    fn test_locked_blocks() {
        let now = Utc::now();
        let a = access(true, None);
        assert_eq!(check_access(Some(&a), now), Err(AccessBlock::Locked));
    }

    #[test]
    fn test_past_deadline_blocks_even_when_unlocked() {
        let now = Utc::now();
        let a = access(false, Some(now - Duration::hours(1)));
        assert_eq!(
            check_access(Some(&a), now),
            Err(AccessBlock::DeadlinePassed)
        );
    }

    #[test]
    fn test_lock_reported_before_deadline() {
        // Both conditions hold; lock wins, but either way the gate blocks
        let now = Utc::now();
        let a = access(true, Some(now - Duration::hours(1)));
        assert_eq!(check_access(Some(&a), now), Err(AccessBlock::Locked));
    }

    #[test]
    fn test_future_deadline_allows() {
        let now = Utc::now();
        let a = access(false, Some(now + Duration::hours(1)));
        assert!(check_access(Some(&a), now).is_ok());
    }
}
