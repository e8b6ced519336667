//! Completion API configuration.

use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the completion API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";
/// Environment variable holding the completion API URL.
pub const API_URL_VAR: &str = "GROQ_API_URL";

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
/// Outbound request timeout used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A required setting is absent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set.")]
    Missing(&'static str),
}

/// Settings for talking to the completion API.
///
/// The key and URL are optional so the server can start without them; the
/// chat endpoint refuses requests until both are present.
#[derive(Clone)]
pub struct CompletionConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub model: String,
    /// `None` means no timeout.
    pub request_timeout: Option<Duration>,
}

/// Credential and URL of a fully configured completion API.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub api_key: &'a str,
    pub api_url: &'a str,
}

impl CompletionConfig {
    /// Builds a config, treating empty key or URL values as unset.
    pub fn new(api_key: Option<String>, api_url: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|v| !v.trim().is_empty()),
            api_url: api_url.filter(|v| !v.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Returns the endpoint, or the first missing setting (key before URL).
    pub fn endpoint(&self) -> Result<Endpoint<'_>, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let api_url = self
            .api_url
            .as_deref()
            .ok_or(ConfigError::Missing(API_URL_VAR))?;
        Ok(Endpoint { api_key, api_url })
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint().is_ok()
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
