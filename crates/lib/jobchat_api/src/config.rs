//! API server configuration.

use jobchat_core::config::CompletionConfig;
use jobchat_core::sanitize::DEFAULT_MAX_INPUT_CHARS;
use jobchat_core::truncate::DEFAULT_MAX_SENTENCES;

/// Configuration for the API server. Built once at startup and shared
/// read-only by all requests.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:5000").
    pub bind_addr: String,
    /// Completion API credential, URL, model and timeout.
    pub completion: CompletionConfig,
    /// Cap on sanitized user input, in characters.
    pub max_input_chars: usize,
    /// Maximum number of sentences returned in a reply.
    pub max_sentences: usize,
}

impl ApiConfig {
    /// Config with default limits around the given completion settings.
    pub fn new(bind_addr: impl Into<String>, completion: CompletionConfig) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            completion,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            max_sentences: DEFAULT_MAX_SENTENCES,
        }
    }
}
