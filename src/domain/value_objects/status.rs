//! # Application Status
//!
//! The coordinator's final answer for one resolution call.
//!
//! # Examples
//!
//! ```
//! use status_race::domain::value_objects::status::ApplicationStatus;
//!
//! let status = ApplicationStatus::resolved("app-1", "APPROVED");
//! assert!(status.is_resolved());
//! ```

use crate::domain::value_objects::ids::ApplicationId;
use crate::domain::value_objects::timestamp::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final status produced by one resolution call.
///
/// `Unresolved` is a value, not an error: it is the conclusive negative
/// business outcome, distinguished by type from a deadline failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// A provider answered conclusively with a status.
    Resolved {
        /// The application the status belongs to.
        application_id: ApplicationId,
        /// The status reported by the winning provider.
        status: String,
    },

    /// A provider answered conclusively that no status exists.
    Unresolved {
        /// When the last round of lookups was issued, if any round completed.
        last_request_time: Option<Timestamp>,
        /// Number of retry outcomes observed before the call concluded.
        retry_count: u32,
    },
}

impl ApplicationStatus {
    /// Creates a resolved status.
    #[must_use]
    pub fn resolved(application_id: impl Into<ApplicationId>, status: impl Into<String>) -> Self {
        Self::Resolved {
            application_id: application_id.into(),
            status: status.into(),
        }
    }

    /// Creates an unresolved status snapshot.
    #[must_use]
    pub const fn unresolved(last_request_time: Option<Timestamp>, retry_count: u32) -> Self {
        Self::Unresolved {
            last_request_time,
            retry_count,
        }
    }

    /// Returns true if a status was resolved.
    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }

    /// Returns the retry count, if this is an unresolved status.
    #[inline]
    #[must_use]
    pub const fn retry_count(&self) -> Option<u32> {
        match self {
            Self::Resolved { .. } => None,
            Self::Unresolved { retry_count, .. } => Some(*retry_count),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved {
                application_id,
                status,
            } => write!(f, "{application_id}: {status}"),
            Self::Unresolved { retry_count, .. } => {
                write!(f, "unresolved after {retry_count} retries")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn resolved_accessors() {
        let status = ApplicationStatus::resolved("app-1", "APPROVED");
        assert!(status.is_resolved());
        assert!(status.retry_count().is_none());
        assert_eq!(status.to_string(), "app-1: APPROVED");
    }

    #[test]
    fn unresolved_accessors() {
        let status = ApplicationStatus::unresolved(None, 3);
        assert!(!status.is_resolved());
        assert_eq!(status.retry_count(), Some(3));
        assert_eq!(status.to_string(), "unresolved after 3 retries");
    }
}
