//! RCA Tracker API
//!
//! HTTP service for recording incident reports and listing them back.
//! Volatile in-memory storage; bind to 127.0.0.1 by default (internal only).

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod types;

pub use config::Config;
pub use error::{ApiError, ConfigError};
pub use routes::router;
pub use service::IncidentService;
pub use state::AppState;
pub use store::IncidentStore;
pub use types::{Incident, IncidentInput};
