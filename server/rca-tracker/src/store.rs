//! In-memory incident store. Volatile: contents are lost when the process exits.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::{Incident, NewIncident};

/// Ordered, append-only collection of incidents.
///
/// Id assignment and the append happen under the same lock, so concurrent
/// appends always receive distinct, consecutive ids.
#[derive(Debug, Default)]
pub struct IncidentStore {
  inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
  /// Last id handed out. Decoupled from `incidents.len()`.
  last_id: u64,
  incidents: Vec<Incident>,
}

impl IncidentStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Assign the next id, store the record, and return a copy of it.
  pub fn append(&self, new: NewIncident) -> Incident {
    let mut inner = self.lock();
    inner.last_id += 1;
    let incident = Incident::from_new(inner.last_id, new);
    inner.incidents.push(incident.clone());
    incident
  }

  /// Snapshot of every incident in insertion order.
  pub fn all(&self) -> Vec<Incident> {
    self.lock().incidents.clone()
  }

  pub fn count(&self) -> usize {
    self.lock().incidents.len()
  }

  // Every critical section leaves `Inner` consistent, so a panic elsewhere
  // while holding the lock doesn't invalidate the data.
  fn lock(&self) -> MutexGuard<'_, Inner> {
    self.inner.lock().unwrap_or_else(PoisonError::into_inner)
  }
}
