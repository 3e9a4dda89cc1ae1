//! # Identifier Value Objects
//!
//! String-based identifiers with domain semantics.
//!
//! # Examples
//!
//! ```
//! use status_race::domain::value_objects::ids::ApplicationId;
//!
//! let id = ApplicationId::new("app-42");
//! assert_eq!(id.as_str(), "app-42");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the application whose status is being resolved.
///
/// Opaque to this crate: providers interpret it, the coordinator only
/// forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new application ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ApplicationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ApplicationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
