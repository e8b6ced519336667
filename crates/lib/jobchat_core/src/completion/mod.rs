//! Completion API client.
//!
//! Sends a single-turn chat completion request to an OpenAI-compatible
//! endpoint and hands back the decoded JSON body. The payload shape is left
//! to the caller; this module only distinguishes transport, status and
//! decode failures. No retries are attempted.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::Endpoint;

/// Failure talking to the completion API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to build HTTP client: {}", error_chain(.0))]
    Build(#[source] reqwest::Error),

    #[error("request failed: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Renders an error followed by each of its sources, joined by `: `.
///
/// reqwest keeps the actual cause (refused, timed out, DNS) in the source
/// chain rather than its own message.
fn error_chain(e: &(dyn StdError + 'static)) -> String {
    let mut out = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.ends_with(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Reusable handle for completion calls. Cheap to clone.
#[derive(Clone, Debug)]
pub struct CompletionClient {
    http: Client,
}

impl CompletionClient {
    /// Creates a client whose requests give up after `timeout`, if set.
    pub fn new(timeout: Option<Duration>) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(UpstreamError::Build)?;
        Ok(Self { http })
    }

    /// Sends `prompt` as a single user message and returns the decoded reply.
    pub async fn complete(
        &self,
        endpoint: Endpoint<'_>,
        model: &str,
        prompt: &str,
    ) -> Result<Value, UpstreamError> {
        debug!(
            url = %endpoint.api_url,
            model,
            prompt_chars = prompt.chars().count(),
            "sending completion request"
        );

        let resp = self
            .http
            .post(endpoint.api_url)
            .header("Authorization", format!("Bearer {}", endpoint.api_key))
            .json(&CompletionRequest {
                model,
                messages: [ChatMessage {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(UpstreamError::Status { status, body });
        }

        let bytes = resp.bytes().await.map_err(UpstreamError::Transport)?;
        let payload = serde_json::from_slice(&bytes)?;
        debug!(%status, "completion response received");
        Ok(payload)
    }
}

/// Pulls `choices[0].message.content` out of a completion payload, or `""`
/// when any part of that path is missing or not a string.
pub fn first_choice_content(payload: &Value) -> &str {
    payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .unwrap_or("")
}
