//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Call once at startup; later calls are ignored.
pub fn init(default_filter: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .try_init();
}
