//! Error types for capture and serving.

use thiserror::Error;

/// Errors while parsing raw bytes into a request.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The request bytes are not valid UTF-8.
    #[error("request is not valid UTF-8")]
    InvalidEncoding,

    /// The request line is missing or incomplete.
    #[error("malformed request line")]
    MalformedRequestLine,

    /// The request line names a method outside the accepted set.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
}

/// Errors from the serving layer.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Socket or channel failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The raw request could not be captured.
    #[error("capture failed: {0}")]
    Capture(#[from] CaptureError),

    /// Handler invocation failed inside the container.
    #[error("container failed: {0}")]
    Container(#[from] augur_container::ContainerError),
}

/// Result type alias for serving operations.
pub type Result<T> = std::result::Result<T, ServeError>;
