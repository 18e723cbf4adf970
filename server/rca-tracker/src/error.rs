//! Structured error types for the tracker.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;

use crate::types::{ErrorOutput, FieldError};

/// Request-level failures. Validation is the only kind a client can trigger.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("validation: {}", describe(.0))]
  Validation(Vec<FieldError>),
}

impl ApiError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation(vec![FieldError::new(field, reason)])
  }

  /// Offending fields, in the order they were detected.
  pub fn fields(&self) -> &[FieldError] {
    match self {
      Self::Validation(fields) => fields,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      Self::Validation(fields) => {
        let body = ErrorOutput::new("validation failed").with_fields(fields);
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
      }
    }
  }
}

fn describe(fields: &[FieldError]) -> String {
  fields
    .iter()
    .map(|f| format!("{}: {}", f.field, f.reason))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Startup failures while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config: {var}: invalid value {value:?}: {reason}")]
  Invalid {
    var: String,
    value: String,
    reason: String,
  },
}

impl ConfigError {
  pub fn invalid(var: &str, value: &str, reason: impl ToString) -> Self {
    Self::Invalid {
      var: var.to_string(),
      value: value.to_string(),
      reason: reason.to_string(),
    }
  }
}
