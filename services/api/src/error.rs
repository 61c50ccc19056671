//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service. Provider
//! failures never reach this type; they are swallowed inside the core's
//! fallback chain. What remains is startup-level failure only.

use crate::config::ConfigError;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
