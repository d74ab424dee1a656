//! Request path wrapper.

use std::fmt;

/// A request path.
///
/// Holds the raw path string and derives its `/`-delimited segments on
/// demand. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uri {
    value: String,
}

impl Uri {
    /// Creates a URI from a raw path string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the path segments.
    ///
    /// Leading and trailing `/` are trimmed before splitting, so `/users/42`
    /// and `/users/42/` segment identically. The root path `/` (and the
    /// empty path) yield a single empty-string segment; extraction treats
    /// that segment as an absent value.
    pub fn segments(&self) -> Vec<&str> {
        self.value.trim_matches('/').split('/').collect()
    }

    /// Returns the raw path string.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Uri {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Uri {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
