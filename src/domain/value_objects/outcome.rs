//! # Lookup Outcome
//!
//! One provider's answer to a single status lookup.
//!
//! This module provides the [`LookupOutcome`] tagged union. Every lookup
//! settles with exactly one of its three variants; `Success` and `Failure`
//! are conclusive and end the race, `Retry` is inconclusive and continues it.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use status_race::domain::value_objects::outcome::LookupOutcome;
//!
//! let outcome = LookupOutcome::retry(Duration::from_secs(5));
//! assert!(!outcome.is_conclusive());
//! ```

use crate::domain::value_objects::ids::ApplicationId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a single provider lookup.
///
/// # Invariants
///
/// - Exactly one variant describes any outcome; no outcome is both
///   conclusive and retryable.
/// - The `Retry` delay is supplied by the remote side; this crate never
///   computes a backoff locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookupOutcome {
    /// Conclusive positive result.
    Success {
        /// The application the status belongs to, as echoed by the provider.
        id: ApplicationId,
        /// The status reported by the provider.
        status: String,
    },

    /// Conclusive negative result. No payload.
    Failure,

    /// Inconclusive; retry this lookup after the given delay.
    Retry {
        /// How long the remote side asked us to wait before retrying.
        delay: Duration,
    },
}

impl LookupOutcome {
    /// Creates a success outcome.
    #[must_use]
    pub fn success(id: impl Into<ApplicationId>, status: impl Into<String>) -> Self {
        Self::Success {
            id: id.into(),
            status: status.into(),
        }
    }

    /// Creates a retry outcome with the given delay.
    #[must_use]
    pub const fn retry(delay: Duration) -> Self {
        Self::Retry { delay }
    }

    /// Returns true if this outcome ends the race (`Success` or `Failure`).
    #[inline]
    #[must_use]
    pub const fn is_conclusive(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Failure)
    }

    /// Returns true if this outcome asks for another round.
    #[inline]
    #[must_use]
    pub const fn is_retry(&self) -> bool {
        matches!(self, Self::Retry { .. })
    }
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { id, status } => write!(f, "success: {id} is {status}"),
            Self::Failure => write!(f, "failure"),
            Self::Retry { delay } => write!(f, "retry after {delay:?}"),
        }
    }
}
