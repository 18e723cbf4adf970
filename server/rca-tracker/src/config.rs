//! Service configuration with sane defaults, overridable from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const HOST_VAR: &str = "RCA_TRACKER_HOST";
pub const PORT_VAR: &str = "PORT";

/// Default log filter; `RUST_LOG` takes precedence when set.
pub const DEFAULT_LOG_FILTER: &str = "rca_tracker=info,tower_http=info";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Interface to bind. Loopback by default (internal only).
  pub host: IpAddr,
  pub port: u16,
  /// `tracing` filter directive used when `RUST_LOG` is unset.
  pub log_filter: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 8000,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl Config {
  /// Read overrides from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|var| std::env::var(var).ok())
  }

  /// Build a config from an arbitrary variable lookup. Unset means default;
  /// a set but unparsable value is an error.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let mut config = Self::default();

    if let Some(raw) = lookup(HOST_VAR) {
      config.host = raw
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid(HOST_VAR, &raw, e))?;
    }
    if let Some(raw) = lookup(PORT_VAR) {
      config.port = raw
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid(PORT_VAR, &raw, e))?;
    }

    Ok(config)
  }

  pub fn addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}
