//! Route registry, request resolution and registration sugar.

use augur_http::{Method, Request, Uri};

use crate::error::{Result, RouterError};
use crate::route::{Fallback, Route};

/// The route registry and request resolver.
///
/// Routes are kept in first-registration order and resolution returns the
/// first match, so callers register more specific literal routes before
/// parameterized ones. Re-registering a pattern overwrites the existing
/// route in place, keeping its original position. The registry is built
/// once at bootstrap and read-only afterwards; share it behind `Arc`.
#[derive(Debug)]
pub struct Router<H> {
    routes: Vec<Route<H>>,
    fallback: Option<Fallback<H>>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Router<H> {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            fallback: None,
        }
    }

    /// Registers a route, overwriting any route with the same pattern.
    pub fn set_route(&mut self, route: Route<H>) {
        if let Some(existing) = self
            .routes
            .iter_mut()
            .find(|r| r.pattern() == route.pattern())
        {
            *existing = route;
        } else {
            self.routes.push(route);
        }
    }

    /// Returns the registered routes in registration order.
    pub fn routes(&self) -> &[Route<H>] {
        &self.routes
    }

    /// Returns the first registered route matching the URI, if any.
    pub fn route_for(&self, uri: &Uri) -> Option<&Route<H>> {
        self.routes.iter().find(|route| route.matches(uri))
    }

    /// Sets the fallback, replacing any previous one.
    pub fn set_fallback(&mut self, fallback: Fallback<H>) {
        self.fallback = Some(fallback);
    }

    /// Returns whether a fallback is configured.
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Returns the configured fallback, if any.
    pub fn fallback(&self) -> Option<&Fallback<H>> {
        self.fallback.as_ref()
    }

    /// Resolves a request to its route or the fallback.
    ///
    /// A matched route must accept the request method; a mismatch fails
    /// with [`RouterError::MethodNotAllowed`] before the fallback is ever
    /// considered. On a match the extracted route parameters are merged
    /// into the request, overwriting on key collision; fallback dispatch
    /// leaves the request parameters untouched. With no match and no
    /// fallback, fails with [`RouterError::NotFound`].
    pub fn handle_request<'r>(&'r self, request: &mut Request) -> Result<Dispatched<'r, H>> {
        let uri = request.uri().clone();

        if let Some(route) = self.route_for(&uri) {
            if !request.is_method(route.methods()) {
                return Err(RouterError::MethodNotAllowed {
                    method: request.method().to_string(),
                    uri: uri.to_string(),
                });
            }

            let params = route.params(&uri)?;
            request.put_parameters(params);

            Ok(Dispatched::Route(route))
        } else if let Some(fallback) = self.fallback.as_ref() {
            Ok(Dispatched::Fallback(fallback))
        } else {
            Err(RouterError::NotFound {
                method: request.method().to_string(),
                uri: uri.to_string(),
            })
        }
    }

    /// Adds a GET route (also accepting INFO).
    #[must_use]
    pub fn get(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::get(pattern, handler));
        self
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::post(pattern, handler));
        self
    }

    /// Adds a PUT route.
    #[must_use]
    pub fn put(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::put(pattern, handler));
        self
    }

    /// Adds a PATCH route.
    #[must_use]
    pub fn patch(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::patch(pattern, handler));
        self
    }

    /// Adds a DELETE route.
    #[must_use]
    pub fn delete(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::delete(pattern, handler));
        self
    }

    /// Adds a HEAD route.
    #[must_use]
    pub fn head(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::head(pattern, handler));
        self
    }

    /// Adds an OPTIONS route.
    #[must_use]
    pub fn options(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::options(pattern, handler));
        self
    }

    /// Adds an INFO route.
    #[must_use]
    pub fn info(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::info(pattern, handler));
        self
    }

    /// Adds a route accepting every method.
    #[must_use]
    pub fn any(mut self, pattern: &str, handler: H) -> Self {
        self.set_route(Route::any(pattern, handler));
        self
    }

    /// Adds a route with an explicit method set.
    #[must_use]
    pub fn route(mut self, methods: Vec<Method>, pattern: &str, handler: H) -> Self {
        self.set_route(Route::new(methods, pattern, handler));
        self
    }

    /// Sets the fallback handler.
    #[must_use]
    pub fn with_fallback(mut self, handler: H) -> Self {
        self.set_fallback(Fallback::new(handler));
        self
    }

    /// Merges a route group into the router.
    #[must_use]
    pub fn group(mut self, group: RouteGroup<H>) -> Self {
        for route in group.into_routes() {
            self.set_route(route);
        }
        self
    }
}

/// Resolution outcome: the matched route or the configured fallback.
///
/// Both expose a handler; the dispatch glue treats them uniformly.
#[derive(Debug)]
pub enum Dispatched<'r, H> {
    /// A route matched the request.
    Route(&'r Route<H>),
    /// No route matched; the fallback takes over.
    Fallback(&'r Fallback<H>),
}

impl<'r, H> Dispatched<'r, H> {
    /// Returns the handler to invoke.
    pub fn handler(&self) -> &'r H {
        match self {
            Self::Route(route) => route.handler(),
            Self::Fallback(fallback) => fallback.handler(),
        }
    }

    /// Returns whether the fallback was dispatched.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// A group of routes registered under a common prefix.
///
/// The prefix is an explicit value carried by the group; merging into a
/// router prepends it to every pattern.
pub struct RouteGroup<H> {
    prefix: String,
    routes: Vec<Route<H>>,
}

impl<H> RouteGroup<H> {
    /// Creates a group with the given prefix.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            routes: Vec::new(),
        }
    }

    /// Adds a GET route (also accepting INFO).
    #[must_use]
    pub fn get(mut self, pattern: &str, handler: H) -> Self {
        self.routes.push(Route::get(self.prefixed(pattern), handler));
        self
    }

    /// Adds a POST route.
    #[must_use]
    pub fn post(mut self, pattern: &str, handler: H) -> Self {
        self.routes
            .push(Route::post(self.prefixed(pattern), handler));
        self
    }

    /// Adds a PUT route.
    #[must_use]
    pub fn put(mut self, pattern: &str, handler: H) -> Self {
        self.routes.push(Route::put(self.prefixed(pattern), handler));
        self
    }

    /// Adds a PATCH route.
    #[must_use]
    pub fn patch(mut self, pattern: &str, handler: H) -> Self {
        self.routes
            .push(Route::patch(self.prefixed(pattern), handler));
        self
    }

    /// Adds a DELETE route.
    #[must_use]
    pub fn delete(mut self, pattern: &str, handler: H) -> Self {
        self.routes
            .push(Route::delete(self.prefixed(pattern), handler));
        self
    }

    /// Adds a route with an explicit method set.
    #[must_use]
    pub fn route(mut self, methods: Vec<Method>, pattern: &str, handler: H) -> Self {
        self.routes
            .push(Route::new(methods, self.prefixed(pattern), handler));
        self
    }

    /// Returns the routes in this group.
    pub fn into_routes(self) -> Vec<Route<H>> {
        self.routes
    }

    fn prefixed(&self, pattern: &str) -> String {
        format!("{}{pattern}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_route_and_merges_params() {
        let router = Router::new().get("/users/{id}", "get_user");

        let mut request = Request::get("/users/42");
        let dispatched = router.handle_request(&mut request).unwrap();

        assert!(!dispatched.is_fallback());
        assert_eq!(*dispatched.handler(), "get_user");
        assert_eq!(request.param("id"), Some("42"));
    }

    #[test]
    fn test_method_mismatch_is_rejected() {
        let router = Router::new().get("/users/{id}", "get_user");

        let mut request = Request::post("/users/42");
        let err = router.handle_request(&mut request).unwrap_err();

        assert!(matches!(err, RouterError::MethodNotAllowed { method, .. } if method == "POST"));
    }

    #[test]
    fn test_method_mismatch_takes_priority_over_fallback() {
        let router = Router::new()
            .get("/users/{id}", "get_user")
            .with_fallback("fallback");

        let mut request = Request::post("/users/42");
        assert!(matches!(
            router.handle_request(&mut request),
            Err(RouterError::MethodNotAllowed { .. })
        ));
    }

    #[test]
    fn test_fallback_when_no_route_matches() {
        let router = Router::new()
            .get("/users", "users")
            .with_fallback("fallback");

        let mut request = Request::get("/missing").with_params(
            augur_http::Params::from_iter([("keep", "1")]),
        );
        let dispatched = router.handle_request(&mut request).unwrap();

        assert!(dispatched.is_fallback());
        assert_eq!(*dispatched.handler(), "fallback");
        // Fallback dispatch never merges route parameters.
        assert_eq!(request.params().len(), 1);
        assert_eq!(request.param("keep"), Some("1"));
    }

    #[test]
    fn test_no_match_and_no_fallback_is_an_error() {
        let router: Router<&str> = Router::new();

        let mut request = Request::get("/anything");
        let err = router.handle_request(&mut request).unwrap_err();

        assert!(matches!(err, RouterError::NotFound { uri, .. } if uri == "/anything"));
    }

    #[test]
    fn test_first_match_wins_in_registration_order() {
        let router = Router::new().get("/a/{x}", "param").get("/a/b", "literal");

        let route = router.route_for(&Uri::new("/a/b")).unwrap();
        assert_eq!(*route.handler(), "param");
    }

    #[test]
    fn test_reregistering_a_pattern_overwrites_in_place() {
        let router = Router::new()
            .get("/a/{x}", "first")
            .get("/a/b", "literal")
            .post("/a/{x}", "second");

        assert_eq!(router.routes().len(), 2);
        // The overwritten route keeps its original position, so it still
        // wins over the later literal registration.
        let route = router.route_for(&Uri::new("/a/b")).unwrap();
        assert_eq!(*route.handler(), "second");
        assert_eq!(route.methods(), &[Method::Post]);
    }

    #[test]
    fn test_last_fallback_wins() {
        let router = Router::new()
            .with_fallback("first")
            .with_fallback("second");

        assert!(router.has_fallback());
        assert_eq!(*router.fallback().unwrap().handler(), "second");
    }

    #[test]
    fn test_wildcard_route_matches_any_suffix() {
        let router = Router::new().get("/assets/*", "assets");

        let mut request = Request::get("/assets/css/app.css");
        let dispatched = router.handle_request(&mut request).unwrap();

        assert_eq!(*dispatched.handler(), "assets");
        assert!(request.params().is_empty());
    }

    #[test]
    fn test_missing_required_parameter_surfaces_during_resolution() {
        let router = Router::new().get("/{id}", "show");

        let mut request = Request::get("/");
        let err = router.handle_request(&mut request).unwrap_err();

        assert!(matches!(err, RouterError::MissingParameter { name, .. } if name == "id"));
    }

    #[test]
    fn test_route_group_prefixes_patterns() {
        let api = RouteGroup::new("/api/v1")
            .get("/users", "list")
            .get("/users/{id}", "show");

        let router = Router::new().group(api);

        let mut request = Request::get("/api/v1/users/7");
        let dispatched = router.handle_request(&mut request).unwrap();

        assert_eq!(*dispatched.handler(), "show");
        assert_eq!(request.param("id"), Some("7"));
    }

    #[test]
    fn test_info_reaches_get_routes() {
        let router = Router::new().get("/status", "status");

        let mut request = Request::new(Method::Info, "/status");
        assert!(router.handle_request(&mut request).is_ok());
    }
}
