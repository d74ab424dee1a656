//! HTTP request value object.

use std::collections::HashMap;

use crate::{Method, Params, Uri};

/// An inbound HTTP request.
///
/// Parameters hold the merged query and form-body values; the router merges
/// extracted route parameters into the same map exactly once, after route
/// resolution, overwriting on key collision.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: Uri,
    params: Params,
    cookies: HashMap<String, String>,
    body: String,
}

impl Request {
    /// Creates a request with no parameters, cookies or body.
    pub fn new(method: Method, uri: impl Into<Uri>) -> Self {
        Self {
            method,
            uri: uri.into(),
            params: Params::new(),
            cookies: HashMap::new(),
            body: String::new(),
        }
    }

    /// Creates a GET request.
    pub fn get(uri: impl Into<Uri>) -> Self {
        Self::new(Method::Get, uri)
    }

    /// Creates a POST request.
    pub fn post(uri: impl Into<Uri>) -> Self {
        Self::new(Method::Post, uri)
    }

    /// Sets the parameters.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Sets the cookies.
    #[must_use]
    pub fn with_cookies(mut self, cookies: HashMap<String, String>) -> Self {
        self.cookies = cookies;
        self
    }

    /// Sets the raw body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the request method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns whether the method is one of the given methods.
    pub fn is_method(&self, methods: &[Method]) -> bool {
        methods.contains(&self.method)
    }

    /// Returns the request URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the request parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Gets a single parameter value.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Merges parameters into the request, overwriting on key collision.
    pub fn put_parameters(&mut self, params: Params) {
        self.params.merge(params);
    }

    /// Returns the request cookies.
    pub fn cookies(&self) -> &HashMap<String, String> {
        &self.cookies
    }

    /// Gets a single cookie value.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Returns the raw request body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = Request::get("/users")
            .with_params(Params::from_iter([("page", "1")]))
            .with_body("{}");

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.uri().as_str(), "/users");
        assert_eq!(request.param("page"), Some("1"));
        assert_eq!(request.body(), "{}");
    }

    #[test]
    fn test_is_method() {
        let request = Request::get("/");
        assert!(request.is_method(&[Method::Get, Method::Info]));
        assert!(!request.is_method(&[Method::Post]));
    }

    #[test]
    fn test_put_parameters_overwrites() {
        let mut request = Request::get("/").with_params(Params::from_iter([("id", "old")]));
        request.put_parameters(Params::from_iter([("id", "42"), ("extra", "x")]));

        assert_eq!(request.param("id"), Some("42"));
        assert_eq!(request.param("extra"), Some("x"));
    }

    #[test]
    fn test_json_body() {
        #[derive(serde::Deserialize)]
        struct Payload {
            name: String,
        }

        let request = Request::post("/users").with_body(r#"{"name":"ada"}"#);
        let payload: Payload = request.json().unwrap();
        assert_eq!(payload.name, "ada");
    }
}
