//! Error types for the discovery system.

use thiserror::Error;

/// Error type for discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Socket creation, send or receive failed
    #[error("Network error: {0}")]
    NetworkError(String),
    /// A response or URL could not be interpreted
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Convenience Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
