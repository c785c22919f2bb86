//! Input/output operations and error handling

/// Command-line interface and job orchestration
pub mod cli;
/// Default parameters and limits
pub mod configuration;
/// Error types for every fallible operation
pub mod error;
/// PNG export of rendered patterns
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Terminal progress reporting
pub mod progress;
