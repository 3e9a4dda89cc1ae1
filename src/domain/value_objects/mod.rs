//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ApplicationId`]: String-based application identifier
//!
//! ## Time
//!
//! - [`Timestamp`]: UTC timestamp wrapper
//!
//! ## Outcome Types
//!
//! - [`LookupOutcome`]: One provider's answer to a single lookup
//! - [`ApplicationStatus`]: The coordinator's final answer for one call

pub mod ids;
pub mod outcome;
pub mod status;
pub mod timestamp;

pub use ids::ApplicationId;
pub use outcome::LookupOutcome;
pub use status::ApplicationStatus;
pub use timestamp::Timestamp;
