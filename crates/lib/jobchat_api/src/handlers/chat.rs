//! Chat relay handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use jobchat_core::completion::first_choice_content;
use jobchat_core::prompt::compose_prompt;
use jobchat_core::sanitize::sanitize;
use jobchat_core::truncate::truncate_sentences;
use tracing::{debug, error, info, warn};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::models::ChatReply;

/// `POST /chat` — relay one message to the completion API and return a
/// shortened reply.
///
/// Configuration is checked before the body, so an unconfigured server
/// answers 500 even for malformed requests. The body is read as raw JSON:
/// only a `message` string inside an object counts, so arrays and scalars
/// are reported as a missing message.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let config = &state.config;

    let endpoint = config.completion.endpoint().map_err(|e| {
        error!("{e}");
        AppError::from(e)
    })?;

    let Json(body) = body.map_err(|e| {
        warn!(reason = %e.body_text(), "rejected chat request body");
        AppError::from(e)
    })?;

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| {
            warn!("No message provided");
            AppError::Validation("No message provided".into())
        })?;

    let message = sanitize(message, config.max_input_chars);
    let prompt = compose_prompt(&message);

    let payload = state
        .client
        .complete(endpoint, &config.completion.model, &prompt)
        .await
        .map_err(|e| {
            error!(error = %e, "completion API call failed");
            AppError::from(e)
        })?;

    let content = first_choice_content(&payload);
    if content.is_empty() {
        debug!("completion payload carried no reply content");
    }
    let reply = truncate_sentences(content, config.max_sentences);

    info!(
        input_chars = message.chars().count(),
        reply_chars = reply.chars().count(),
        "chat reply sent"
    );

    Ok(Json(ChatReply { reply }))
}
