//! # Application Layer
//!
//! Coordination logic between domain types and provider ports.

pub mod error;
pub mod services;
