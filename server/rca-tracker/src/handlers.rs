//! HTTP handlers for the tracker.

use axum::{
  extract::{rejection::JsonRejection, State},
  http::StatusCode,
  Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{HealthStatus, Incident, IncidentInput};

pub async fn health() -> Json<HealthStatus> {
  Json(HealthStatus::ok())
}

pub async fn list_incidents(State(state): State<Arc<AppState>>) -> Json<Vec<Incident>> {
  Json(state.incidents.list())
}

/// Any body that isn't a JSON object is a validation failure on `body`.
pub async fn create_incident(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Incident>), ApiError> {
  let Json(value) = payload.map_err(|e| ApiError::validation("body", body_reason(&e)))?;

  let Value::Object(obj) = value else {
    return Err(ApiError::validation("body", "expected a JSON object"));
  };
  let input = IncidentInput::from(obj);

  let incident = state.incidents.create(&input)?;
  Ok((StatusCode::CREATED, Json(incident)))
}

/// Stable reason strings, independent of the framework's rejection wording.
fn body_reason(rejection: &JsonRejection) -> &'static str {
  match rejection {
    JsonRejection::MissingJsonContentType(_) => "expected content-type application/json",
    JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => "invalid JSON",
    _ => "unreadable request body",
  }
}
