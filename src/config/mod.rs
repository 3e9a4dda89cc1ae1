//! # Configuration
//!
//! Settings loading for the race engine and its two providers.
//!
//! Settings are layered: an optional TOML file, then environment variables
//! prefixed with `STATUS_RACE__` (e.g. `STATUS_RACE__DEADLINE_MS=15000`,
//! `STATUS_RACE__PRIMARY__BASE_URL=...`).
//!
//! # Examples
//!
//! ```
//! use status_race::config::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     deadline_ms = 15000
//!
//!     [primary]
//!     base_url = "https://status-a.example.com"
//!
//!     [secondary]
//!     base_url = "https://status-b.example.com"
//! "#).unwrap();
//!
//! assert_eq!(settings.deadline_ms, 15000);
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Default overall deadline in milliseconds.
const DEFAULT_DEADLINE_MS: u64 = 10_000;

/// Default per-request timeout in milliseconds.
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5_000;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The underlying source could not be read or deserialized.
    #[error("configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

/// Settings for one status provider endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    /// Base URL of the status service.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Settings for the race engine and both providers.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Overall deadline for one resolution call in milliseconds.
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,
    /// First status provider.
    pub primary: ProviderSettings,
    /// Second status provider.
    pub secondary: ProviderSettings,
}

impl Settings {
    /// Loads settings from an optional `status-race.toml` file in the
    /// working directory, overlaid with environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if a source cannot be read or a required
    /// field is missing.
    pub fn load() -> Result<Self, SettingsError> {
        Self::build(config::File::with_name("status-race").required(false))
    }

    /// Loads settings from a specific file, overlaid with environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file cannot be read or a required
    /// field is missing.
    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        Self::build(config::File::with_name(path))
    }

    /// Parses settings from a TOML string. Intended for tests and embedding.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the string is not valid TOML or a
    /// required field is missing.
    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    fn build(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<Self, SettingsError> {
        Self::from_sources(file, environment())
    }

    fn from_sources<F, E>(file: F, environment: E) -> Result<Self, SettingsError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

/// The `STATUS_RACE__`-prefixed environment overlay.
fn environment() -> config::Environment {
    config::Environment::with_prefix("STATUS_RACE").separator("__")
}

fn default_deadline_ms() -> u64 {
    DEFAULT_DEADLINE_MS
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_settings() {
        let settings = Settings::from_toml_str(
            r#"
            deadline_ms = 15000

            [primary]
            base_url = "https://status-a.example.com"
            request_timeout_ms = 2000

            [secondary]
            base_url = "https://status-b.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(settings.deadline_ms, 15_000);
        assert_eq!(settings.primary.base_url, "https://status-a.example.com");
        assert_eq!(settings.primary.request_timeout_ms, 2_000);
        assert_eq!(settings.secondary.request_timeout_ms, 5_000);
    }

    #[test]
    fn deadline_defaults_when_absent() {
        let settings = Settings::from_toml_str(
            r#"
            [primary]
            base_url = "https://a"

            [secondary]
            base_url = "https://b"
            "#,
        )
        .unwrap();

        assert_eq!(settings.deadline_ms, 10_000);
    }

    #[test]
    fn environment_overlay_overrides_file_values() {
        let file = config::File::from_str(
            r#"
            deadline_ms = 10000

            [primary]
            base_url = "https://file-a"

            [secondary]
            base_url = "https://file-b"
            "#,
            config::FileFormat::Toml,
        );
        let environment = environment().source(Some(config::Map::from([
            ("STATUS_RACE__DEADLINE_MS".to_string(), "2500".to_string()),
            (
                "STATUS_RACE__PRIMARY__BASE_URL".to_string(),
                "https://env-a".to_string(),
            ),
        ])));

        let settings = Settings::from_sources(file, environment).unwrap();

        assert_eq!(settings.deadline_ms, 2_500);
        assert_eq!(settings.primary.base_url, "https://env-a");
        assert_eq!(settings.secondary.base_url, "https://file-b");
    }

    #[test]
    fn missing_provider_is_an_error() {
        let result = Settings::from_toml_str(
            r#"
            [primary]
            base_url = "https://a"
            "#,
        );

        assert!(result.is_err());
    }
}
