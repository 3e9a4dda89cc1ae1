//! # status-race
//!
//! Redundant application-status resolution.
//!
//! Two independent services can answer "what is the status of application X?".
//! This crate races a paired lookup against both of them under a single
//! wall-clock deadline and returns the first conclusive answer, tolerating
//! retry-after hints and transport failures from either side.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`]: Value objects ([`ApplicationId`], [`Timestamp`],
//!   [`LookupOutcome`], [`ApplicationStatus`])
//! - [`application`]: The [`StatusRaceEngine`] coordination core
//! - [`infrastructure`]: The [`StatusProvider`] port and its HTTP adapter
//! - [`config`]: File/environment settings loading
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use status_race::{ApplicationId, RaceConfig, StatusRaceEngine};
//! use status_race::infrastructure::providers::http::HttpStatusProvider;
//!
//! let engine = StatusRaceEngine::new(
//!     Arc::new(HttpStatusProvider::new("primary", primary_settings)?),
//!     Arc::new(HttpStatusProvider::new("secondary", secondary_settings)?),
//!     RaceConfig::with_deadline(10_000),
//! );
//!
//! match engine.resolve(&ApplicationId::new("app-42")).await? {
//!     status if status.is_resolved() => println!("{status}"),
//!     unresolved => println!("no conclusive answer: {unresolved}"),
//! }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::error::{ResolveError, ResolveResult};
pub use application::services::status_race::{RaceConfig, StatusRaceEngine};
pub use domain::value_objects::ids::ApplicationId;
pub use domain::value_objects::outcome::LookupOutcome;
pub use domain::value_objects::status::ApplicationStatus;
pub use domain::value_objects::timestamp::Timestamp;
pub use infrastructure::providers::traits::StatusProvider;
