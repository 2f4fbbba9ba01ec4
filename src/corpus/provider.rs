//! Frequency data provider client
//!
//! Queries a Datamuse-style word API for pattern matches annotated with
//! usage-frequency metadata. The provider is treated as an unreliable,
//! rate-limited network dependency: every call has bounded timeouts and any
//! failure is surfaced as a `ProviderError` for the caller to absorb.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Default production endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";

/// Tag prefix carrying the frequency value, e.g. "f:12.34"
const FREQUENCY_TAG_PREFIX: &str = "f:";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur when querying the frequency provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned status {status}")]
    Status { status: u16 },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// One record in a provider response.
///
/// `tags` carries optional metadata strings; the frequency tag is identified
/// by the `f:` prefix with a decimal number after the separator.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderRecord {
    pub word: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProviderRecord {
    /// Extract the frequency value from the tag metadata, if present.
    #[must_use]
    pub fn frequency(&self) -> Option<f64> {
        self.tags
            .iter()
            .find_map(|tag| tag.strip_prefix(FREQUENCY_TAG_PREFIX))
            .and_then(|suffix| suffix.parse().ok())
    }
}

/// Source of pattern-matched words with frequency metadata.
///
/// The corpus builder is generic over this trait so tests can drive it with
/// an in-memory fake instead of the network.
pub trait FrequencySource {
    /// Look up words matching `pattern` (with `?` as any-letter wildcard),
    /// returning at most `max` records annotated with frequency tags.
    ///
    /// # Errors
    /// Returns `ProviderError` on network failure, non-success status, or an
    /// unparseable response body.
    fn lookup(&self, pattern: &str, max: usize) -> Result<Vec<ProviderRecord>, ProviderError>;
}

/// HTTP client for the Datamuse words API.
pub struct DatamuseClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl DatamuseClient {
    /// Create a client against the default endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint (local stubs, mirrors).
    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this client queries.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for DatamuseClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencySource for DatamuseClient {
    fn lookup(&self, pattern: &str, max: usize) -> Result<Vec<ProviderRecord>, ProviderError> {
        let max = max.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("sp", pattern), ("md", "f"), ("max", max.as_str())])
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<ProviderRecord>>()
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_uses_default_endpoint() {
        let client = DatamuseClient::new();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn client_with_custom_endpoint() {
        let client = DatamuseClient::with_endpoint("http://localhost:9100/words");
        assert_eq!(client.endpoint(), "http://localhost:9100/words");
    }

    #[test]
    fn record_frequency_parses_tag() {
        let record: ProviderRecord =
            serde_json::from_str(r#"{"word":"example","tags":["f:28.47","n"]}"#).unwrap();
        assert_eq!(record.frequency(), Some(28.47));
    }

    #[test]
    fn record_frequency_missing_tag() {
        let record: ProviderRecord = serde_json::from_str(r#"{"word":"example"}"#).unwrap();
        assert_eq!(record.frequency(), None);

        let record: ProviderRecord =
            serde_json::from_str(r#"{"word":"example","tags":["n","adj"]}"#).unwrap();
        assert_eq!(record.frequency(), None);
    }

    #[test]
    fn record_frequency_unparseable_number() {
        let record: ProviderRecord =
            serde_json::from_str(r#"{"word":"example","tags":["f:not-a-number"]}"#).unwrap();
        assert_eq!(record.frequency(), None);
    }

    #[test]
    fn record_frequency_uses_first_frequency_tag() {
        let record: ProviderRecord =
            serde_json::from_str(r#"{"word":"example","tags":["f:1.5","f:9.9"]}"#).unwrap();
        assert_eq!(record.frequency(), Some(1.5));
    }
}
