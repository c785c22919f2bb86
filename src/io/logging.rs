//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::EnvFilter;

use crate::io::error::{Result, computation_error};

/// Install the global stderr subscriber, filtered by `RUST_LOG`
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_subscriber() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| computation_error("tracing subscriber", &e))
}
