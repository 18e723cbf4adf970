//! Incident service: validates create requests and fronts the store.

use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::store::IncidentStore;
use crate::types::{FieldError, Incident, IncidentInput, NewIncident};

/// List/create operations over an owned [`IncidentStore`].
#[derive(Debug, Default)]
pub struct IncidentService {
  store: IncidentStore,
}

impl IncidentService {
  pub fn new(store: IncidentStore) -> Self {
    Self { store }
  }

  /// Every incident, in creation order.
  pub fn list(&self) -> Vec<Incident> {
    self.store.all()
  }

  /// Validate `input` and record it. A rejected input never reaches the store.
  pub fn create(&self, input: &IncidentInput) -> Result<Incident, ApiError> {
    let new = match validate(input) {
      Ok(new) => new,
      Err(e) => {
        debug!(fields = e.fields().len(), "create rejected: {}", e);
        return Err(e);
      }
    };

    let incident = self.store.append(new);
    info!(id = incident.id, severity = %incident.severity, "incident created");
    Ok(incident)
  }

  pub fn count(&self) -> usize {
    self.store.count()
  }
}

/// Check a raw create payload, collecting every offending field.
///
/// `title` and `severity` must be present, non-empty strings. `description`
/// may be absent (defaults to ""), otherwise it must be a string. A present
/// `null` is a type error, not a missing field. Severity values are free text.
pub fn validate(input: &IncidentInput) -> Result<NewIncident, ApiError> {
  let mut errors = Vec::new();

  let title = required_text("title", input.title.as_ref(), &mut errors);
  let severity = required_text("severity", input.severity.as_ref(), &mut errors);
  let description = match &input.description {
    None => Some(String::new()),
    Some(Value::String(s)) => Some(s.clone()),
    Some(_) => {
      errors.push(FieldError::new("description", "must be a string"));
      None
    }
  };

  match (title, severity, description) {
    (Some(title), Some(severity), Some(description)) if errors.is_empty() => Ok(NewIncident {
      title,
      severity,
      description,
    }),
    _ => Err(ApiError::Validation(errors)),
  }
}

fn required_text(
  field: &str,
  value: Option<&Value>,
  errors: &mut Vec<FieldError>,
) -> Option<String> {
  match value {
    None => {
      errors.push(FieldError::new(field, "field required"));
      None
    }
    Some(Value::String(s)) if s.is_empty() => {
      errors.push(FieldError::new(field, "must not be empty"));
      None
    }
    Some(Value::String(s)) => Some(s.clone()),
    Some(_) => {
      errors.push(FieldError::new(field, "must be a string"));
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn input(v: Value) -> IncidentInput {
    match v {
      Value::Object(obj) => IncidentInput::from(obj),
      other => panic!("expected an object, got {}", other),
    }
  }

  fn field_names(err: &ApiError) -> Vec<&str> {
    err.fields().iter().map(|f| f.field.as_str()).collect()
  }

  #[test]
  fn sequential_creates_get_ids_one_to_n() {
    let svc = IncidentService::default();
    let ids: Vec<u64> = (0..10)
      .map(|i| {
        svc
          .create(&IncidentInput::new(&format!("incident {}", i), "P3", None))
          .unwrap()
          .id
      })
      .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
  }

  #[test]
  fn list_returns_created_incidents_in_order() {
    let svc = IncidentService::default();
    svc
      .create(&IncidentInput::new("Login error", "P2", Some("Users cannot log in")))
      .unwrap();
    svc.create(&IncidentInput::new("API timeout", "P1", None)).unwrap();

    let all = svc.list();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[0].title, "Login error");
    assert_eq!(all[0].description, "Users cannot log in");
    assert_eq!(all[1].id, 2);
    assert_eq!(all[1].severity, "P1");
    assert_eq!(all[1].description, "");
  }

  #[test]
  fn missing_title_is_rejected_without_touching_store() {
    let svc = IncidentService::default();
    let err = svc.create(&input(json!({"severity": "P1"}))).unwrap_err();
    assert_eq!(field_names(&err), vec!["title"]);
    assert_eq!(err.fields()[0].reason, "field required");
    assert_eq!(svc.count(), 0);
  }

  #[test]
  fn all_offending_fields_are_reported() {
    let err = validate(&input(json!({"title": "", "description": 7}))).unwrap_err();
    assert_eq!(field_names(&err), vec!["title", "severity", "description"]);
    assert_eq!(err.fields()[0].reason, "must not be empty");
    assert_eq!(err.fields()[1].reason, "field required");
    assert_eq!(err.fields()[2].reason, "must be a string");
  }

  #[test]
  fn non_string_values_are_rejected() {
    let err = validate(&input(json!({"title": 42, "severity": ["P1"]}))).unwrap_err();
    assert_eq!(field_names(&err), vec!["title", "severity"]);
    assert!(err.fields().iter().all(|f| f.reason == "must be a string"));
  }

  #[test]
  fn absent_description_defaults_to_empty() {
    let new = validate(&input(json!({"title": "t", "severity": "P1"}))).unwrap();
    assert_eq!(new.description, "");
  }

  #[test]
  fn null_description_is_rejected() {
    let svc = IncidentService::default();
    let err = svc
      .create(&input(json!({"title": "t", "severity": "P1", "description": null})))
      .unwrap_err();
    assert_eq!(field_names(&err), vec!["description"]);
    assert_eq!(err.fields()[0].reason, "must be a string");
    assert_eq!(svc.count(), 0);
  }

  #[test]
  fn null_required_fields_are_type_errors() {
    let err = validate(&input(json!({"title": null, "severity": null}))).unwrap_err();
    assert_eq!(field_names(&err), vec!["title", "severity"]);
    assert!(err.fields().iter().all(|f| f.reason == "must be a string"));
  }

  #[test]
  fn severity_is_free_text() {
    let new = validate(&IncidentInput::new("Disk full", "sev-whatever", None)).unwrap();
    assert_eq!(new.severity, "sev-whatever");
  }

  #[test]
  fn failed_create_does_not_consume_an_id() {
    let svc = IncidentService::default();
    svc.create(&IncidentInput::new("first", "P1", None)).unwrap();
    assert!(svc.create(&input(json!({"title": "no severity"}))).is_err());
    let second = svc.create(&IncidentInput::new("second", "P2", None)).unwrap();
    assert_eq!(second.id, 2);
  }
}
