//! Errors raised while acquiring an introspection schema.

use thiserror::Error;

/// Result alias for schema acquisition.
pub type Result<T> = std::result::Result<T, IntrospectionError>;

/// Failure to obtain or decode an introspection schema.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    /// The request could not be sent or timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {0}: {1}")]
    Http(u16, String),

    /// The payload was not valid introspection JSON.
    #[error("failed to parse introspection response: {0}")]
    Parse(String),

    /// The payload parsed but carried no usable schema.
    #[error("invalid introspection response: {0}")]
    Invalid(String),

    /// A local schema file could not be read.
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),
}
