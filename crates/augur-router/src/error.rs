//! Error types for routing.

use thiserror::Error;

/// Routing errors.
///
/// None of these are recovered within the routing layer itself; they surface
/// to the dispatch boundary, which translates them into 4xx responses.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route matched the request and no fallback is configured.
    #[error("no route matched: {method} {uri}")]
    NotFound { method: String, uri: String },

    /// A route matched the URI but does not accept the request method.
    #[error("method not allowed: {method} for {uri}")]
    MethodNotAllowed { method: String, uri: String },

    /// A required parameter has no value in the URI.
    #[error("invalid URI {uri}: missing required parameter [{name}]")]
    MissingParameter { uri: String, name: String },

    /// Reverse routing was given no value for a required parameter.
    #[error("missing required parameter [{name}]")]
    MissingReverseParameter { name: String },
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
