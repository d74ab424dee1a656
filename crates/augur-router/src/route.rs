//! Route definition, matching and reverse routing.

use augur_http::{Method, Params, Uri};

use crate::error::{Result, RouterError};
use crate::pattern::{self, WILDCARD};

/// A registered route: accepted methods, a URI pattern and a handler.
///
/// Pattern segments are matched literally except for `{name}` (required
/// parameter), `{name?}` (optional parameter) and `*` (trailing wildcard).
/// The handler type is opaque to the routing layer. Never mutated after
/// creation.
#[derive(Debug, Clone)]
pub struct Route<H> {
    methods: Vec<Method>,
    pattern: String,
    handler: H,
}

impl<H> Route<H> {
    /// Creates a route accepting the given methods.
    pub fn new(methods: Vec<Method>, pattern: impl Into<String>, handler: H) -> Self {
        Self {
            methods,
            pattern: pattern.into(),
            handler,
        }
    }

    /// Creates a GET route. Also accepts the custom INFO method.
    pub fn get(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Get, Method::Info], pattern, handler)
    }

    /// Creates a POST route.
    pub fn post(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Post], pattern, handler)
    }

    /// Creates a PUT route.
    pub fn put(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Put], pattern, handler)
    }

    /// Creates a PATCH route.
    pub fn patch(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Patch], pattern, handler)
    }

    /// Creates a DELETE route.
    pub fn delete(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Delete], pattern, handler)
    }

    /// Creates a HEAD route.
    pub fn head(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Head], pattern, handler)
    }

    /// Creates an OPTIONS route.
    pub fn options(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Options], pattern, handler)
    }

    /// Creates an INFO route.
    pub fn info(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(vec![Method::Info], pattern, handler)
    }

    /// Creates a route accepting every method.
    pub fn any(pattern: impl Into<String>, handler: H) -> Self {
        Self::new(Method::ALL.to_vec(), pattern, handler)
    }

    /// Returns the accepted methods.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Returns the pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the pattern segments, trimmed and split like a URI path.
    pub fn pattern_segments(&self) -> Vec<&str> {
        self.pattern.trim_matches('/').split('/').collect()
    }

    /// Returns the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Returns whether the pattern accepts the given URI.
    ///
    /// A URI matches when the pattern equals it outright, or when every URI
    /// segment satisfies the pattern segment at its index (literal equality,
    /// any value for a parameter, everything from a `*` on) and any trailing
    /// pattern segments beyond the URI are all optional parameters.
    /// Existence at the index is what parameters require here; emptiness
    /// only matters during extraction.
    pub fn matches(&self, uri: &Uri) -> bool {
        if self.pattern == uri.as_str() {
            return true;
        }

        let pattern_segments = self.pattern_segments();
        let uri_segments = uri.segments();

        for (index, segment) in uri_segments.iter().enumerate() {
            let Some(pattern_segment) = pattern_segments.get(index).copied() else {
                return false;
            };

            if pattern_segment.is_empty() {
                return false;
            }

            if pattern_segment == WILDCARD {
                return true;
            }

            if pattern::param(pattern_segment).is_some() {
                continue;
            }

            if pattern_segment != *segment {
                return false;
            }
        }

        pattern_segments[uri_segments.len()..]
            .iter()
            .all(|segment| pattern::param(segment).is_some_and(|param| param.optional))
    }

    /// Extracts the parameter values a matching URI carries.
    ///
    /// Required parameters whose URI segment is absent or empty fail with
    /// [`RouterError::MissingParameter`]; absent optional parameters are
    /// skipped. Literal segments contribute nothing.
    pub fn params(&self, uri: &Uri) -> Result<Params> {
        let segments = uri.segments();
        let mut params = Params::new();

        for (index, pattern_segment) in self.pattern_segments().into_iter().enumerate() {
            let Some(param) = pattern::param(pattern_segment) else {
                continue;
            };

            match segments.get(index).copied().filter(|s| !s.is_empty()) {
                Some(value) => params.insert(param.name, value),
                None if param.optional => {}
                None => {
                    return Err(RouterError::MissingParameter {
                        uri: uri.to_string(),
                        name: param.name,
                    })
                }
            }
        }

        Ok(params)
    }

    /// Builds a URI from the pattern and the given parameters.
    ///
    /// Required parameters must be present in the map; absent optional
    /// parameters are skipped. Literal segments (the wildcard included) pass
    /// through unchanged.
    pub fn uri(&self, params: &Params) -> Result<Uri> {
        let mut segments = Vec::new();

        for pattern_segment in self.pattern_segments() {
            let Some(param) = pattern::param(pattern_segment) else {
                segments.push(pattern_segment);
                continue;
            };

            match params.get(&param.name) {
                Some(value) => segments.push(value),
                None if param.optional => {}
                None => {
                    return Err(RouterError::MissingReverseParameter { name: param.name });
                }
            }
        }

        Ok(Uri::new(segments.join("/")))
    }
}

/// A catch-all record dispatched when no route matches.
#[derive(Debug, Clone)]
pub struct Fallback<H> {
    handler: H,
}

impl<H> Fallback<H> {
    /// Creates a fallback with the given handler.
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Returns the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }
}
