//! Error types for the discovery library.

use thiserror::Error;

/// Main error type for discovery operations.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A required discovery option is missing or empty.
    #[error("invalid discovery options: {0}")]
    InvalidOptions(String),

    /// The content store query failed. Never retried here; the caller decides.
    #[error("content query failed: {0}")]
    Query(String),

    /// The cache layer raised instead of degrading to a miss.
    #[error("cache layer failed: {0}")]
    Cache(String),

    /// Sitemap XML serialization failed.
    #[error("sitemap serialization failed: {0}")]
    Xml(String),

    /// A cached payload could not be encoded or decoded.
    #[error("cache payload codec failed: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Type alias for Result with DiscoveryError.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
