//! Baseline document fetching.
//!
//! Retrieves the last published protocol document from its well-known
//! location over HTTPS. The fetch is a single blocking request with no
//! retries; any transport, status, or decode problem is a fatal abort
//! distinct from rule failures.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{ProtogateError, Result};
use crate::protocol::Protocol;

/// Where the published protocol definition lives unless overridden on the
/// command line.
pub const DEFAULT_BASELINE_URL: &str = "https://protocol.example.org/protocol.json";

/// Fetches and decodes the published baseline protocol.
pub struct BaselineClient {
    client: Client,
    timeout: Duration,
}

impl BaselineClient {
    /// Create a client with the default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("protogate/", env!("CARGO_PKG_VERSION")))
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch the baseline document from `url` and decode it.
    pub fn fetch(&self, url: &str) -> Result<Protocol> {
        tracing::debug!("fetching baseline protocol from {url}");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ProtogateError::BaselineFetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(ProtogateError::BaselineFetch {
                url: url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| ProtogateError::BaselineFetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Protocol::from_slice(&body).map_err(|source| ProtogateError::BaselineParse {
            url: url.to_string(),
            source,
        })
    }
}

impl Default for BaselineClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let client = BaselineClient::new();
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let client = BaselineClient::with_timeout(Duration::from_secs(5));
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn fetches_and_decodes_baseline() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/protocol.json");
            then.status(200)
                .body(r#"{"doc_version": "v1", "types": {}, "actions": {}}"#);
        });

        let baseline = BaselineClient::new().fetch(&server.url("/protocol.json")).unwrap();

        mock.assert();
        assert_eq!(baseline.doc_version, "v1");
    }

    #[test]
    fn http_error_status_is_a_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/protocol.json");
            then.status(500);
        });

        let err = BaselineClient::new()
            .fetch(&server.url("/protocol.json"))
            .unwrap_err();

        assert!(matches!(err, ProtogateError::BaselineFetch { .. }));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/protocol.json");
            then.status(200).body("not json");
        });

        let err = BaselineClient::new()
            .fetch(&server.url("/protocol.json"))
            .unwrap_err();

        assert!(matches!(err, ProtogateError::BaselineParse { .. }));
    }

    #[test]
    fn unreachable_host_is_a_fetch_error() {
        let err = BaselineClient::with_timeout(Duration::from_millis(200))
            .fetch("http://127.0.0.1:1/protocol.json")
            .unwrap_err();

        assert!(matches!(err, ProtogateError::BaselineFetch { .. }));
    }
}
