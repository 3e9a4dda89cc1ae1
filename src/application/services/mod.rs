//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides:
//! - [`StatusRaceEngine`]: Concurrent status resolution against paired providers
//! - [`RaceConfig`]: Deadline configuration for the engine
//!
//! [`StatusRaceEngine`]: status_race::StatusRaceEngine
//! [`RaceConfig`]: status_race::RaceConfig

pub mod status_race;

pub use status_race::{RaceConfig, StatusRaceEngine};
