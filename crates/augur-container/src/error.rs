//! Error types for the container.

use thiserror::Error;

/// Container errors.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// No factory or instance is registered for the type.
    #[error("no binding registered for type {0}")]
    Unbound(&'static str),

    /// No handler is registered under the name.
    #[error("unknown handler: {0}")]
    UnknownHandler(String),
}

/// Result type alias for container operations.
pub type Result<T> = std::result::Result<T, ContainerError>;
