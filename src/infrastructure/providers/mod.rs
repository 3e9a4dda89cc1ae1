//! # Status Providers
//!
//! Port definition and adapters for the redundant status services.
//!
//! ## Port
//!
//! - [`StatusProvider`]: Async lookup capability with cooperative cancellation
//!
//! ## Implementations
//!
//! - [`http::HttpStatusProvider`]: reqwest-backed adapter for HTTP services

pub mod error;
pub mod http;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use http::HttpStatusProvider;
pub use traits::StatusProvider;
