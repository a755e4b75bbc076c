//! Error types for the cache
//!
//! Provides unified error handling using thiserror. Cache operations
//! themselves never fail; errors only arise from configuration and from
//! malformed console input.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Configuration would produce an unusable cache
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Console line could not be parsed into a command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;
