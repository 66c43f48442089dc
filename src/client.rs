//! GeoSafe backend API client.
//!
//! Provides blocking HTTP access to the neighborhood scores endpoint.
//! Uses reqwest with rustls for TLS.

use std::env;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, error, instrument};

use crate::errors::GeosafeError;
use crate::models::{NeighborhoodScore, parse_scores};

/// Request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 500;

/// User agent string for API requests.
const USER_AGENT: &str = concat!("geosafe/", env!("CARGO_PKG_VERSION"));

/// Backend origin used when no override is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend origin.
pub const API_URL_VAR: &str = "GEOSAFE_API_URL";

/// Environment variable holding the bearer token for the session.
pub const AUTH_TOKEN_VAR: &str = "GEOSAFE_AUTH_TOKEN";

/// Path of the leaderboard scores endpoint, under the API root.
const SCORES_PATH: &str = "/safety/all-neighborhoods-scores/";

/// Connection settings for the scores backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Full API root, origin plus the `/api` prefix.
    pub base_url: String,
}

impl ApiConfig {
    /// Read the backend origin from the environment, falling back to the
    /// local development default.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_base_url(env::var(API_URL_VAR).ok())
    }

    /// Build a config from an optional origin override.
    #[must_use]
    pub fn from_base_url(origin: Option<String>) -> Self {
        let origin = origin.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url: format!("{origin}/api"),
        }
    }
}

/// Source of the bearer token attached to outgoing requests.
pub trait TokenProvider: Send + Sync {
    /// Current token, or `None` when the session is anonymous.
    fn bearer_token(&self) -> Option<String>;
}

/// Token store backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn bearer_token(&self) -> Option<String> {
        env::var(AUTH_TOKEN_VAR).ok().filter(|t| !t.is_empty())
    }
}

/// Client for the GeoSafe scores API.
pub struct SafetyApiClient {
    client: Client,
    base_url: String,
    tokens: Box<dyn TokenProvider>,
}

impl SafetyApiClient {
    /// Create a client with the environment-backed token store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, GeosafeError> {
        Self::with_tokens(config, Box::new(EnvTokenProvider))
    }

    /// Create a client with an explicit token store.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_tokens(
        config: &ApiConfig,
        tokens: Box<dyn TokenProvider>,
    ) -> Result<Self, GeosafeError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            tokens,
        })
    }

    /// URL of the scores endpoint.
    #[must_use]
    pub fn scores_url(&self) -> String {
        format!("{}{SCORES_PATH}", self.base_url)
    }

    /// Fetch the neighborhood leaderboard scores.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload cannot be
    /// parsed. Every failure is logged by kind before being passed back
    /// to the caller.
    #[instrument(skip(self))]
    pub fn fetch_scores(&self) -> Result<Vec<NeighborhoodScore>, GeosafeError> {
        let url = self.scores_url();

        debug!("fetching scores from {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = self.tokens.bearer_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|err| log_failure(&url, err.into()))?;

        // Check status before parsing
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(log_failure(
                &url,
                GeosafeError::Api {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        let body = response.text().map_err(|err| log_failure(&url, err.into()))?;
        let scores = parse_scores(&body).map_err(|err| log_failure(&url, err))?;

        debug!("fetched {} neighborhood scores", scores.len());
        Ok(scores)
    }
}

/// Log a request failure by kind, then hand the error back up.
fn log_failure(url: &str, err: GeosafeError) -> GeosafeError {
    match &err {
        GeosafeError::Api { status, body } => {
            error!("scores API error (HTTP {}): {}", status, body);
        }
        GeosafeError::Transport(source) => {
            error!("no response from {}: {}", url, source);
        }
        GeosafeError::Setup(source) => {
            error!("request setup failed: {}", source);
        }
        GeosafeError::Decode(source) => {
            error!("scores payload from {} did not parse: {}", url, source);
        }
        GeosafeError::Validation(message) => {
            error!("scores payload from {} invalid: {}", url, message);
        }
    }
    err
}
