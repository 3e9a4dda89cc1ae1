//! # Status Provider Trait
//!
//! Port definition for status service integrations.
//!
//! This module defines the [`StatusProvider`] trait that both redundant
//! status services must implement. The race engine only depends on this
//! contract; transport details live entirely inside the adapter.
//!
//! # Examples
//!
//! ```ignore
//! use status_race::infrastructure::providers::traits::StatusProvider;
//!
//! struct MyProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl StatusProvider for MyProvider {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::value_objects::ids::ApplicationId;
use crate::domain::value_objects::outcome::LookupOutcome;
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// Async status lookup capability.
///
/// # Contract
///
/// - Each call settles with exactly one [`LookupOutcome`], or fails with a
///   transport-level [`ProviderError`] — which the race engine treats as a
///   lookup that never settles.
/// - Implementations must observe `cancel` and abandon work promptly when it
///   fires; failing to do so blocks the caller's deadline enforcement.
/// - Implementations are stateless across calls: every round issues a
///   brand-new lookup and a provider does not need to remember prior rounds.
/// - A provider instance may be shared across concurrent calls; `lookup`
///   must be side-effect-free on shared state.
///
/// [`ProviderError`]: crate::infrastructure::providers::error::ProviderError
#[async_trait]
pub trait StatusProvider: fmt::Debug + Send + Sync {
    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;

    /// Looks up the status of an application.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] on transport-level failure (connection,
    /// timeout, malformed payload, cancellation).
    ///
    /// [`ProviderError`]: crate::infrastructure::providers::error::ProviderError
    async fn lookup(
        &self,
        application_id: &ApplicationId,
        cancel: CancellationToken,
    ) -> ProviderResult<LookupOutcome>;
}
