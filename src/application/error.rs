//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Exactly one error kind escapes [`resolve`]: the deadline failure. Every
//! other situation yields a typed [`ApplicationStatus`] value — a conclusive
//! negative answer is `Unresolved`, not an error, and provider transport
//! failures never surface here at all.
//!
//! [`resolve`]: crate::application::services::status_race::StatusRaceEngine::resolve
//! [`ApplicationStatus`]: crate::domain::value_objects::status::ApplicationStatus
//!
//! # Examples
//!
//! ```
//! use status_race::application::error::ResolveError;
//!
//! let err = ResolveError::deadline_exceeded(10_000);
//! assert!(err.to_string().contains("10000"));
//! ```

use thiserror::Error;

/// Error type for status resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The overall time budget was exhausted before a conclusive outcome.
    #[error("deadline exceeded: no conclusive outcome within {deadline_ms}ms")]
    DeadlineExceeded {
        /// The configured deadline in milliseconds.
        deadline_ms: u64,
    },
}

impl ResolveError {
    /// Creates a deadline-exceeded error.
    #[must_use]
    pub const fn deadline_exceeded(deadline_ms: u64) -> Self {
        Self::DeadlineExceeded { deadline_ms }
    }
}

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
