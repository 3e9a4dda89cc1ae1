//! # Domain Layer
//!
//! Value objects with validation and domain semantics.
//!
//! This layer has no dependency on the application or infrastructure layers.

pub mod value_objects;
