//! HTTP response type.

use std::io::{self, Write};

use crate::{Communicable, Content, Header};

/// An outgoing HTTP response.
#[derive(Debug, Clone, Default)]
pub struct Response {
    content: Content,
}

impl Response {
    /// Creates a response from a payload.
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    /// Creates an empty 200 response.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a response with plain text content.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_content_type("text/plain; charset=utf-8", body)
    }

    /// Creates a response with HTML content.
    pub fn html(body: impl Into<String>) -> Self {
        Self::with_content_type("text/html; charset=utf-8", body)
    }

    /// Creates a response with JSON content.
    pub fn json<T: serde::Serialize>(data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Self::with_content_type("application/json", body),
            Err(_) => Self::internal_server_error(),
        }
    }

    /// Creates a redirect response.
    pub fn redirect(url: impl Into<String>) -> Self {
        let mut header = Header::new(302);
        header.set("Location", url);
        Self::new(Content::new(header, ""))
    }

    /// Creates a permanent redirect response.
    pub fn redirect_permanent(url: impl Into<String>) -> Self {
        let mut header = Header::new(301);
        header.set("Location", url);
        Self::new(Content::new(header, ""))
    }

    /// Creates a 400 Bad Request response.
    pub fn bad_request() -> Self {
        Self::plain_status(400, "Bad Request")
    }

    /// Creates a 404 Not Found response.
    pub fn not_found() -> Self {
        Self::plain_status(404, "Not Found")
    }

    /// Creates a 405 Method Not Allowed response.
    pub fn method_not_allowed() -> Self {
        Self::plain_status(405, "Method Not Allowed")
    }

    /// Creates a 500 Internal Server Error response.
    pub fn internal_server_error() -> Self {
        Self::plain_status(500, "Internal Server Error")
    }

    /// Sets the status code.
    #[must_use]
    pub fn status(mut self, status: u16) -> Self {
        self.content.header_mut().set_status(status);
        self
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.content.header_mut().set(name, value);
        self
    }

    /// Returns the payload.
    pub fn content(&self) -> &Content {
        &self.content
    }

    fn with_content_type(content_type: &str, body: impl Into<String>) -> Self {
        let mut header = Header::empty();
        header.set("Content-Type", content_type);
        Self::new(Content::new(header, body))
    }

    fn plain_status(status: u16, body: &str) -> Self {
        Self::new(Content::new(Header::new(status), body))
    }
}

impl Communicable for Response {
    fn send(&self, channel: &mut dyn Write) -> io::Result<()> {
        self.content.send(channel)
    }
}
