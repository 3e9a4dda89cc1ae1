//! # Infrastructure Layer
//!
//! Ports and adapters for the external status services.

pub mod providers;
