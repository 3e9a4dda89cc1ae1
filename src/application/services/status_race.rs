//! # Status Race Engine
//!
//! Races paired status lookups under a wall-clock deadline.
//!
//! This module provides the [`StatusRaceEngine`] which issues one lookup to
//! each of two redundant providers per round, consumes whichever settles
//! first, and drives the retry loop until a conclusive outcome or the
//! deadline, whichever comes first.
//!
//! # State Machine
//!
//! ```text
//! Racing ──Success──→ Resolved (value)
//!   │ ↑ ──Failure──→ Unresolved (value)
//!   │ └──Retry───── wait min(delay, remaining)
//!   └──deadline────→ DeadlineExceeded (error)
//! ```
//!
//! # Examples
//!
//! ```ignore
//! use status_race::{ApplicationId, RaceConfig, StatusRaceEngine};
//!
//! let engine = StatusRaceEngine::new(provider_a, provider_b, RaceConfig::with_deadline(10_000));
//! let status = engine.resolve(&ApplicationId::new("app-42")).await?;
//! ```

use crate::application::error::{ResolveError, ResolveResult};
use crate::domain::value_objects::ids::ApplicationId;
use crate::domain::value_objects::outcome::LookupOutcome;
use crate::domain::value_objects::status::ApplicationStatus;
use crate::domain::value_objects::timestamp::Timestamp;
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::traits::StatusProvider;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

/// Configuration for the race engine.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Overall deadline for one resolution call in milliseconds.
    pub deadline_ms: u64,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self { deadline_ms: 10_000 }
    }
}

impl RaceConfig {
    /// Creates a configuration with the specified overall deadline.
    #[must_use]
    pub const fn with_deadline(deadline_ms: u64) -> Self {
        Self { deadline_ms }
    }

    /// Returns the deadline as a [`Duration`].
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

/// Per-call race bookkeeping.
///
/// Created at the start of [`StatusRaceEngine::resolve`], discarded on
/// return. Never shared across calls.
#[derive(Debug, Default)]
struct RaceState {
    /// Incremented once per retry outcome observed, never reset.
    retry_count: u32,
    /// Issue time of the most recent round, not the time a response arrived.
    last_request_time: Option<Timestamp>,
}

/// Engine that resolves an application status by racing two providers.
///
/// Per round, both providers receive a brand-new lookup bound to one shared
/// per-call cancellation token; the first to settle wins and the slower
/// lookup is dropped. A provider transport error is treated as a lookup that
/// never settles, so a single failing provider cannot abort the race.
///
/// The engine holds no mutable state: concurrent `resolve` calls each own
/// their deadline, counters, and cancellation token.
#[derive(Debug)]
pub struct StatusRaceEngine {
    provider_a: Arc<dyn StatusProvider>,
    provider_b: Arc<dyn StatusProvider>,
    config: RaceConfig,
}

impl StatusRaceEngine {
    /// Creates a new engine over two providers.
    #[must_use]
    pub fn new(
        provider_a: Arc<dyn StatusProvider>,
        provider_b: Arc<dyn StatusProvider>,
        config: RaceConfig,
    ) -> Self {
        Self {
            provider_a,
            provider_b,
            config,
        }
    }

    /// Creates a new engine with the default configuration.
    #[must_use]
    pub fn with_defaults(
        provider_a: Arc<dyn StatusProvider>,
        provider_b: Arc<dyn StatusProvider>,
    ) -> Self {
        Self::new(provider_a, provider_b, RaceConfig::default())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Resolves the status of an application.
    ///
    /// Issues concurrent lookups to both providers, returns the first
    /// conclusive answer, and honors retry-after hints from either side.
    /// The deadline is fixed once at call start and is not extended by
    /// retries; a retry wait is clipped to the remaining budget.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::DeadlineExceeded`] if no conclusive outcome
    /// is reached within the configured deadline. Every other situation
    /// yields an [`ApplicationStatus`] value.
    pub async fn resolve(&self, application_id: &ApplicationId) -> ResolveResult<ApplicationStatus> {
        let deadline_ms = self.config.deadline_ms;
        let deadline = Instant::now() + self.config.deadline();

        // One cancellation source per call, shared by both providers. The
        // guard cancels it on every return path so in-flight lookups stop
        // promptly.
        let cancel = CancellationToken::new();
        let _cancel_guard = cancel.clone().drop_guard();

        let mut state = RaceState::default();

        loop {
            state.last_request_time = Some(Timestamp::now());
            tracing::debug!(
                application_id = %application_id,
                retry_count = state.retry_count,
                "issuing lookup round"
            );

            // Both lookups are created before either is awaited.
            let lookup_a = self.provider_a.lookup(application_id, cancel.clone());
            let lookup_b = self.provider_b.lookup(application_id, cancel.clone());
            let round = first_settled(
                self.provider_a.name(),
                lookup_a,
                self.provider_b.name(),
                lookup_b,
            );
            tokio::pin!(round);

            // Biased: a fully received outcome takes precedence over a
            // simultaneously expiring deadline.
            let outcome = tokio::select! {
                biased;
                outcome = &mut round => outcome,
                () = time::sleep_until(deadline) => {
                    tracing::warn!(
                        application_id = %application_id,
                        deadline_ms,
                        "deadline expired while racing lookups"
                    );
                    return Err(ResolveError::deadline_exceeded(deadline_ms));
                }
            };

            match outcome {
                LookupOutcome::Success { id, status } => {
                    tracing::debug!(application_id = %id, status = %status, "status resolved");
                    return Ok(ApplicationStatus::Resolved {
                        application_id: id,
                        status,
                    });
                }
                LookupOutcome::Failure => {
                    return Ok(ApplicationStatus::unresolved(
                        state.last_request_time,
                        state.retry_count,
                    ));
                }
                LookupOutcome::Retry { delay } => {
                    state.retry_count += 1;
                    let resume_at = Instant::now() + delay;
                    if resume_at >= deadline {
                        // The wait is clipped to the remaining budget; the
                        // deadline lands inside it, so this call times out.
                        time::sleep_until(deadline).await;
                        tracing::warn!(
                            application_id = %application_id,
                            deadline_ms,
                            "deadline expired during retry wait"
                        );
                        return Err(ResolveError::deadline_exceeded(deadline_ms));
                    }
                    if !delay.is_zero() {
                        time::sleep(delay).await;
                    }
                }
            }
        }
    }
}

/// Awaits the first of two lookups to settle with an outcome.
///
/// A transport error is a non-settling branch: the race keeps waiting on the
/// other lookup. If both error, this future pends forever and the caller's
/// deadline branch wins.
async fn first_settled<A, B>(
    name_a: &str,
    lookup_a: A,
    name_b: &str,
    lookup_b: B,
) -> LookupOutcome
where
    A: Future<Output = ProviderResult<LookupOutcome>>,
    B: Future<Output = ProviderResult<LookupOutcome>>,
{
    tokio::pin!(lookup_a, lookup_b);
    let mut a_pending = true;
    let mut b_pending = true;

    loop {
        tokio::select! {
            result = &mut lookup_a, if a_pending => match result {
                Ok(outcome) => return outcome,
                Err(error) => {
                    tracing::warn!(provider = name_a, error = %error, "lookup failed, race continues");
                    a_pending = false;
                }
            },
            result = &mut lookup_b, if b_pending => match result {
                Ok(outcome) => return outcome,
                Err(error) => {
                    tracing::warn!(provider = name_b, error = %error, "lookup failed, race continues");
                    b_pending = false;
                }
            },
            else => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::infrastructure::providers::error::ProviderError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    enum Script {
        /// Same result on every call.
        Always(ProviderResult<LookupOutcome>),
        /// Results in order; when exhausted the lookup never settles.
        Sequence(VecDeque<ProviderResult<LookupOutcome>>),
        /// Never settles.
        Never,
    }

    #[derive(Debug)]
    struct MockProvider {
        name: &'static str,
        delay: Duration,
        script: Mutex<Script>,
        calls: AtomicU32,
    }

    impl MockProvider {
        fn succeeding(name: &'static str, delay: Duration, status: &str) -> Self {
            Self {
                name,
                delay,
                script: Mutex::new(Script::Always(Ok(LookupOutcome::success("app-1", status)))),
                calls: AtomicU32::new(0),
            }
        }

        fn repeating(name: &'static str, outcome: LookupOutcome) -> Self {
            Self {
                name,
                delay: Duration::ZERO,
                script: Mutex::new(Script::Always(Ok(outcome))),
                calls: AtomicU32::new(0),
            }
        }

        fn erroring(name: &'static str) -> Self {
            Self {
                name,
                delay: Duration::ZERO,
                script: Mutex::new(Script::Always(Err(ProviderError::connection(
                    "connection refused",
                )))),
                calls: AtomicU32::new(0),
            }
        }

        fn scripted(
            name: &'static str,
            results: impl IntoIterator<Item = ProviderResult<LookupOutcome>>,
        ) -> Self {
            Self {
                name,
                delay: Duration::ZERO,
                script: Mutex::new(Script::Sequence(results.into_iter().collect())),
                calls: AtomicU32::new(0),
            }
        }

        fn never_settling(name: &'static str) -> Self {
            Self {
                name,
                delay: Duration::ZERO,
                script: Mutex::new(Script::Never),
                calls: AtomicU32::new(0),
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusProvider for MockProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn lookup(
            &self,
            _application_id: &ApplicationId,
            _cancel: CancellationToken,
        ) -> ProviderResult<LookupOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                time::sleep(self.delay).await;
            }

            let next = match &mut *self.script.lock().unwrap() {
                Script::Always(result) => Some(result.clone()),
                Script::Sequence(results) => results.pop_front(),
                Script::Never => None,
            };
            match next {
                Some(result) => result,
                None => std::future::pending().await,
            }
        }
    }

    fn engine(a: Arc<MockProvider>, b: Arc<MockProvider>, deadline_ms: u64) -> StatusRaceEngine {
        StatusRaceEngine::new(a, b, RaceConfig::with_deadline(deadline_ms))
    }

    fn app_id() -> ApplicationId {
        ApplicationId::new("app-1")
    }

    #[tokio::test(start_paused = true)]
    async fn fastest_success_wins() {
        let a = Arc::new(MockProvider::succeeding("a", Duration::from_secs(1), "s1"));
        let b = Arc::new(MockProvider::succeeding("b", Duration::from_secs(10), "s2"));
        let engine = engine(a, b, 10_000);

        let started = Instant::now();
        let status = engine.resolve(&app_id()).await.unwrap();

        assert_eq!(status, ApplicationStatus::resolved("app-1", "s1"));
        assert_eq!(started.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn first_settled_wins_regardless_of_order() {
        let a = Arc::new(MockProvider::succeeding("a", Duration::from_secs(10), "s1"));
        let b = Arc::new(MockProvider::succeeding("b", Duration::from_secs(1), "s2"));
        let engine = engine(a, b, 10_000);

        let status = engine.resolve(&app_id()).await.unwrap();
        assert_eq!(status, ApplicationStatus::resolved("app-1", "s2"));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_exceeded_when_no_lookup_settles() {
        let a = Arc::new(MockProvider::succeeding("a", Duration::from_secs(20), "s1"));
        let b = Arc::new(MockProvider::succeeding("b", Duration::from_secs(20), "s2"));
        let engine = engine(a, b, 10_000);

        let started = Instant::now();
        let result = engine.resolve(&app_id()).await;

        assert_eq!(result, Err(ResolveError::deadline_exceeded(10_000)));
        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn outcome_settling_at_deadline_is_still_consumed() {
        // Lookup latency equals the deadline exactly; the fully received
        // outcome takes precedence over the simultaneously expiring deadline.
        let a = Arc::new(MockProvider::succeeding("a", Duration::from_secs(10), "s1"));
        let b = Arc::new(MockProvider::never_settling("b"));
        let engine = engine(a, b, 10_000);

        let started = Instant::now();
        let status = engine.resolve(&app_id()).await.unwrap();

        assert_eq!(status, ApplicationStatus::resolved("app-1", "s1"));
        assert_eq!(started.elapsed(), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_count_accumulates_across_rounds() {
        let a = Arc::new(MockProvider::scripted(
            "a",
            vec![
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::Failure),
            ],
        ));
        let b = Arc::new(MockProvider::never_settling("b"));
        let engine = engine(a, b, 10_000);

        let status = engine.resolve(&app_id()).await.unwrap();
        assert_eq!(status.retry_count(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_then_failure_snapshots_state() {
        let a = Arc::new(MockProvider::scripted(
            "a",
            vec![
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::Failure),
            ],
        ));
        let b = Arc::new(MockProvider::never_settling("b"));
        let engine = engine(a, b, 10_000);

        match engine.resolve(&app_id()).await.unwrap() {
            ApplicationStatus::Unresolved {
                last_request_time,
                retry_count,
            } => {
                assert_eq!(retry_count, 1);
                assert!(last_request_time.is_some());
            }
            other => panic!("expected unresolved, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn retry_wait_is_clipped_to_deadline() {
        let a = Arc::new(MockProvider::repeating(
            "a",
            LookupOutcome::retry(Duration::from_secs(10)),
        ));
        let b = Arc::new(MockProvider::never_settling("b"));
        let engine = engine(Arc::clone(&a), b, 15_000);

        let started = Instant::now();
        let result = engine.resolve(&app_id()).await;

        assert_eq!(result, Err(ResolveError::deadline_exceeded(15_000)));
        assert_eq!(started.elapsed(), Duration::from_secs(15));
        // Initial round plus one retry; the second retry wait is cut short.
        assert_eq!(a.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn transport_error_does_not_abort_the_race() {
        let a = Arc::new(MockProvider::erroring("a"));
        let b = Arc::new(MockProvider::succeeding("b", Duration::from_secs(1), "s2"));
        let engine = engine(a, b, 10_000);

        let status = engine.resolve(&app_id()).await.unwrap();
        assert_eq!(status, ApplicationStatus::resolved("app-1", "s2"));
    }

    #[tokio::test(start_paused = true)]
    async fn both_transports_failing_ends_in_deadline() {
        let a = Arc::new(MockProvider::erroring("a"));
        let b = Arc::new(MockProvider::erroring("b"));
        let engine = engine(a, b, 5_000);

        let started = Instant::now();
        let result = engine.resolve(&app_id()).await;

        assert_eq!(result, Err(ResolveError::deadline_exceeded(5_000)));
        assert_eq!(started.elapsed(), Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_retry_loops_without_waiting() {
        let a = Arc::new(MockProvider::scripted(
            "a",
            vec![
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::success("app-1", "s1")),
            ],
        ));
        let b = Arc::new(MockProvider::never_settling("b"));
        let engine = engine(a, b, 10_000);

        let started = Instant::now();
        let status = engine.resolve(&app_id()).await.unwrap();

        assert!(status.is_resolved());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn independent_calls_share_no_state() {
        let a = Arc::new(MockProvider::scripted(
            "a",
            vec![
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::Failure),
                Ok(LookupOutcome::retry(Duration::ZERO)),
                Ok(LookupOutcome::Failure),
            ],
        ));
        let b = Arc::new(MockProvider::never_settling("b"));
        let engine = engine(a, b, 10_000);

        let first = engine.resolve(&app_id()).await.unwrap();
        let second = engine.resolve(&app_id()).await.unwrap();

        // The second call starts from zero, not from the first call's count.
        assert_eq!(first.retry_count(), Some(1));
        assert_eq!(second.retry_count(), Some(1));
    }

    #[test]
    fn race_config_defaults() {
        let config = RaceConfig::default();
        assert_eq!(config.deadline_ms, 10_000);
        assert_eq!(config.deadline(), Duration::from_secs(10));

        let config = RaceConfig::with_deadline(1_500);
        assert_eq!(config.deadline(), Duration::from_millis(1_500));
    }
}
