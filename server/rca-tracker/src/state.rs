//! Shared application state handed to every handler.

use crate::service::IncidentService;
use crate::store::IncidentStore;

/// Owned once by the server and shared as `Arc<AppState>`.
#[derive(Debug, Default)]
pub struct AppState {
  pub incidents: IncidentService,
}

impl AppState {
  pub fn new() -> Self {
    Self {
      incidents: IncidentService::new(IncidentStore::new()),
    }
  }
}
