//! Core types for the tracker (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// Raw create payload. Every field is kept loosely typed so validation can
/// report all offending fields at once.
///
/// `None` means the key was absent; a present `null` is `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentInput {
  pub title: Option<Value>,
  pub severity: Option<Value>,
  pub description: Option<Value>,
}

/// Pick the known keys out of a JSON object. Unknown keys are silently ignored.
impl From<Map<String, Value>> for IncidentInput {
  fn from(mut obj: Map<String, Value>) -> Self {
    Self {
      title: obj.remove("title"),
      severity: obj.remove("severity"),
      description: obj.remove("description"),
    }
  }
}

impl IncidentInput {
  /// Convenience constructor for callers that already hold typed values.
  pub fn new(title: &str, severity: &str, description: Option<&str>) -> Self {
    Self {
      title: Some(Value::from(title)),
      severity: Some(Value::from(severity)),
      description: description.map(Value::from),
    }
  }
}

// ---------------------------------------------------------------------------
// Internal validated types
// ---------------------------------------------------------------------------

/// A create request that passed validation; everything but the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIncident {
  pub title: String,
  /// Free text. "P1"/"P2"/"P3" by convention, not enforced.
  pub severity: String,
  pub description: String,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
  pub id: u64,
  pub title: String,
  pub severity: String,
  pub description: String,
}

impl Incident {
  pub fn from_new(id: u64, new: NewIncident) -> Self {
    Self {
      id,
      title: new.title,
      severity: new.severity,
      description: new.description,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
  pub status: &'static str,
}

impl HealthStatus {
  pub fn ok() -> Self {
    Self { status: "ok" }
  }
}

/// One offending field in a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field: String,
  pub reason: String,
}

impl FieldError {
  pub fn new(field: &str, reason: &str) -> Self {
    Self {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}

/// Structured error body for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub fields: Vec<FieldError>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      fields: Vec::new(),
    }
  }

  pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
    self.fields = fields;
    self
  }
}
