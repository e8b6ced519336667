//! Last-resort handling for panics raised while serving a request.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error::AppError;

/// Turns a caught panic payload into a `500 {"error": "Server error: ..."}`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(%detail, "request handler panicked");
    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    async fn error_text(resp: Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        json["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn str_payload() {
        let resp = panic_response(Box::new("index out of bounds"));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_text(resp).await, "Server error: index out of bounds");
    }

    #[tokio::test]
    async fn string_payload() {
        let resp = panic_response(Box::new(format!("bad value {}", 7)));
        assert_eq!(error_text(resp).await, "Server error: bad value 7");
    }

    #[tokio::test]
    async fn opaque_payload() {
        let resp = panic_response(Box::new(42_u8));
        assert_eq!(error_text(resp).await, "Server error: unknown panic");
    }
}
