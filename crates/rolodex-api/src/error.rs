//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure body is `{"success": false, ...}`. Not-found carries an
//! optional `message`; everything else carries `error` with the underlying
//! text.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Nothing matched the identifier.
  #[error("not found")]
  NotFound(Option<&'static str>),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error(transparent)]
  InvalidId(#[from] rolodex_core::Error),

  /// The store handle has not been installed yet.
  #[error("contact store is not available")]
  Unavailable,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound(Some(message)) => (
        StatusCode::NOT_FOUND,
        json!({ "success": false, "message": message }),
      ),
      ApiError::NotFound(None) => {
        (StatusCode::NOT_FOUND, json!({ "success": false }))
      }
      ApiError::BadRequest(m) => (
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "error": m }),
      ),
      ApiError::InvalidId(e) => (
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "error": e.to_string() }),
      ),
      ApiError::Unavailable => (
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "success": false, "error": self.to_string() }),
      ),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          json!({ "success": false, "error": e.to_string() }),
        )
      }
    };
    (status, Json(body)).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn parts(err: ApiError) -> (StatusCode, serde_json::Value) {
    let resp = err.into_response();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[tokio::test]
  async fn store_error_exposes_message() {
    let err = ApiError::store(std::io::Error::other("connection refused"));
    let (status, body) = parts(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "error": "connection refused" }));
  }

  #[tokio::test]
  async fn not_found_with_and_without_message() {
    let (status, body) = parts(ApiError::NotFound(None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false }));

    let (_, body) = parts(ApiError::NotFound(Some("Contact not found"))).await;
    assert_eq!(body, json!({ "success": false, "message": "Contact not found" }));
  }

  #[tokio::test]
  async fn unavailable_is_503() {
    let (status, body) = parts(ApiError::Unavailable).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
  }
}
