//! Upstream HTTP access for the `ExerciseDB` REST API.
//!
//! The catalog is generic over [`ExerciseDbFetcher`] so tests can substitute
//! canned responses; [`HttpFetcher`] is the reqwest-backed implementation
//! used by the daemon.

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

/// Default RapidAPI host serving the `ExerciseDB` dataset.
pub const DEFAULT_API_HOST: &str = "exercisedb.p.rapidapi.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug)]
pub enum FetchError {
    /// The upstream could not be reached or the client failed to build.
    Transport(String),
    /// The upstream answered with a non-success status.
    Status(StatusCode),
    /// The upstream body was not the JSON shape we expected.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "upstream unreachable: {message}"),
            Self::Status(status) => write!(f, "upstream error status: {status}"),
            Self::Decode(message) => write!(f, "failed to decode upstream body: {message}"),
        }
    }
}

impl Error for FetchError {}

/// Source of raw JSON payloads for `ExerciseDB` endpoints.
///
/// `params` are query pairs; every implementation must treat the same
/// endpoint+params as the same logical resource so cached responses stay
/// content-addressed.
pub trait ExerciseDbFetcher: Send + Sync + 'static {
    fn fetch_json(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Configuration for the reqwest-backed fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcherConfig {
    pub api_host: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl HttpFetcherConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = api_host.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP fetcher for the upstream RapidAPI-hosted `ExerciseDB` service.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
    api_host: String,
    api_key: String,
}

impl HttpFetcher {
    /// Builds a fetcher with a fixed per-request timeout.
    ///
    /// # Errors
    /// Returns `FetchError::Transport` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: HttpFetcherConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url: format!("https://{}", config.api_host),
            api_host: config.api_host,
            api_key: config.api_key,
        })
    }
}

impl ExerciseDbFetcher for HttpFetcher {
    async fn fetch_json(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, FetchError> {
        let url = format!("{}{endpoint}", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .header("Accept", "application/json");
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|err| {
            warn!(endpoint, "upstream request failed: {err}");
            FetchError::Transport(err.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, %status, "upstream returned error status");
            if status == StatusCode::UNAUTHORIZED {
                warn!("authentication failed, check the configured RapidAPI key");
            }
            return Err(FetchError::Status(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

/// Encodes a caller-supplied value for use as a URL path segment.
///
/// Upstream taxonomy values contain spaces ("upper legs", "body weight");
/// everything else in the vocabulary is plain ASCII.
#[must_use]
pub fn encode_path_segment(value: &str) -> String {
    value.replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_in_path_segments() {
        assert_eq!(encode_path_segment("upper legs"), "upper%20legs");
        assert_eq!(encode_path_segment("barbell"), "barbell");
    }

    #[test]
    fn fetch_error_display_names_the_failure() {
        let transport = FetchError::Transport("connection refused".to_string());
        assert!(transport.to_string().contains("unreachable"));

        let status = FetchError::Status(StatusCode::UNAUTHORIZED);
        assert!(status.to_string().contains("401"));
    }
}
