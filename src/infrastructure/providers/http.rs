//! # HTTP Status Provider
//!
//! reqwest-backed adapter for HTTP status services.
//!
//! Wire mapping:
//!
//! - `200` with a JSON body `{"id": ..., "status": ...}` → [`LookupOutcome::Success`]
//! - `404` / `410` → [`LookupOutcome::Failure`]
//! - `429` / `503`, honoring a `Retry-After` header in delay-seconds or
//!   HTTP-date form → [`LookupOutcome::Retry`]
//! - anything else → [`ProviderError`] (a non-settling lookup from the
//!   race engine's point of view)
//!
//! # Examples
//!
//! ```ignore
//! use status_race::config::ProviderSettings;
//! use status_race::infrastructure::providers::http::HttpStatusProvider;
//!
//! let provider = HttpStatusProvider::new("primary", &ProviderSettings {
//!     base_url: "https://status.example.com".into(),
//!     request_timeout_ms: 5000,
//! })?;
//! ```

use crate::config::ProviderSettings;
use crate::domain::value_objects::ids::ApplicationId;
use crate::domain::value_objects::outcome::LookupOutcome;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::traits::StatusProvider;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// JSON body returned by a status service on a conclusive positive answer.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    id: ApplicationId,
    status: String,
}

/// HTTP adapter for a status service.
#[derive(Debug, Clone)]
pub struct HttpStatusProvider {
    name: String,
    client: Client,
    base_url: String,
}

impl HttpStatusProvider {
    /// Creates a new HTTP provider from settings.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Internal` if the HTTP client cannot be built.
    pub fn new(name: impl Into<String>, settings: &ProviderSettings) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(settings.request_timeout_ms))
            .build()
            .map_err(|e| ProviderError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            name: name.into(),
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(&self, application_id: &ApplicationId) -> ProviderResult<LookupOutcome> {
        let url = format!("{}/applications/{}/status", self.base_url, application_id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        map_response(response).await
    }
}

#[async_trait]
impl StatusProvider for HttpStatusProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(
        &self,
        application_id: &ApplicationId,
        cancel: CancellationToken,
    ) -> ProviderResult<LookupOutcome> {
        tokio::select! {
            () = cancel.cancelled() => Err(ProviderError::Cancelled),
            result = self.fetch(application_id) => result,
        }
    }
}

/// Maps an HTTP response to a lookup outcome.
async fn map_response(response: Response) -> ProviderResult<LookupOutcome> {
    let status = response.status();

    match status {
        _ if status.is_success() => {
            let body: StatusResponse = response
                .json()
                .await
                .map_err(|e| ProviderError::protocol(format!("failed to parse response: {e}")))?;
            Ok(LookupOutcome::Success {
                id: body.id,
                status: body.status,
            })
        }
        StatusCode::NOT_FOUND | StatusCode::GONE => Ok(LookupOutcome::Failure),
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
            Ok(LookupOutcome::retry(retry_after(&response)))
        }
        _ => Err(ProviderError::protocol(format!(
            "unexpected status code: {status}"
        ))),
    }
}

/// Reads a `Retry-After` header, accepting both the delay-seconds and the
/// HTTP-date form; absent or unparseable means zero.
fn retry_after(response: &Response) -> Duration {
    let Some(value) = response
        .headers()
        .get(header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
    else {
        return Duration::ZERO;
    };

    if let Ok(secs) = value.parse::<u64>() {
        return Duration::from_secs(secs);
    }

    // HTTP-date form: the delay is whatever remains until that instant; a
    // date already in the past means zero.
    chrono::DateTime::parse_from_rfc2822(value)
        .ok()
        .and_then(|date| (date.with_timezone(&chrono::Utc) - chrono::Utc::now()).to_std().ok())
        .unwrap_or(Duration::ZERO)
}

/// Maps a reqwest error to a provider error.
fn map_reqwest_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::timeout("request timed out")
    } else if error.is_connect() {
        ProviderError::connection(format!("connection failed: {error}"))
    } else {
        ProviderError::connection(format!("HTTP request failed: {error}"))
    }
}
