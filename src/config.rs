//! Client configuration
//!
//! Resolved from explicit values first, then environment variables.

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default admin UI language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Connection settings for the CMS publication endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CMS (e.g. `https://cms.example.com`)
    pub base_url: Url,
    /// Active admin UI language, sent as `lang`
    pub language: String,
    /// Session cookie of an authenticated admin user
    pub session: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            language: DEFAULT_LANGUAGE.to_string(),
            session: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Set the admin UI language
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the session cookie
    #[must_use]
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from the environment
    ///
    /// Reads:
    /// - `STATICPUB_URL` (required)
    /// - `STATICPUB_LANG`
    /// - `STATICPUB_SESSION`
    /// - `STATICPUB_TIMEOUT` (seconds)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("STATICPUB_URL")
            .map_err(|_| Error::Config("STATICPUB_URL is not set".to_string()))?;

        let mut config = Self::new(&base_url)?;

        if let Ok(language) = env::var("STATICPUB_LANG") {
            config.language = language;
        }

        if let Ok(session) = env::var("STATICPUB_SESSION") {
            config.session = Some(session);
        }

        if let Ok(timeout) = env::var("STATICPUB_TIMEOUT") {
            let secs = timeout
                .parse::<u64>()
                .map_err(|_| Error::Config(format!("invalid STATICPUB_TIMEOUT: {timeout}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Absolute URL for an endpoint path
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::Config(format!("invalid endpoint path {path}: {e}")))
    }
}

fn parse_base_url(value: &str) -> Result<Url> {
    let mut url =
        Url::parse(value).map_err(|e| Error::Config(format!("invalid base URL {value}: {e}")))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::Config(format!("not an http(s) base URL: {value}")));
    }

    // Relative joins must keep any path prefix the CMS is mounted under
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
