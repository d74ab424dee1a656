//! Response status and header map.

use std::collections::HashMap;
use std::io::{self, Write};

/// The status code and named headers of an outgoing response.
#[derive(Debug, Clone)]
pub struct Header {
    status: u16,
    headers: HashMap<String, String>,
}

impl Header {
    /// Creates a header set with the given status and no headers.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
        }
    }

    /// Creates an empty header set with status 200.
    pub fn empty() -> Self {
        Self::new(200)
    }

    /// Returns the status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Sets the status code.
    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Returns whether a header is set.
    pub fn has(&self, name: &str) -> bool {
        self.headers.contains_key(name)
    }

    /// Gets a header value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Sets a header, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    /// Removes a previously set header.
    pub fn remove(&mut self, name: &str) {
        self.headers.remove(name);
    }

    /// Returns an iterator over the headers.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the status text for the current status code.
    pub fn status_text(&self) -> &'static str {
        match self.status {
            200 => "OK",
            201 => "Created",
            204 => "No Content",
            301 => "Moved Permanently",
            302 => "Found",
            304 => "Not Modified",
            400 => "Bad Request",
            401 => "Unauthorized",
            403 => "Forbidden",
            404 => "Not Found",
            405 => "Method Not Allowed",
            409 => "Conflict",
            422 => "Unprocessable Entity",
            500 => "Internal Server Error",
            502 => "Bad Gateway",
            503 => "Service Unavailable",
            _ => "Unknown",
        }
    }

    /// Writes the status line and header lines to the channel.
    ///
    /// The terminating blank line is not written; the payload owner emits it
    /// once any computed headers are in place.
    pub fn send(&self, channel: &mut dyn Write) -> io::Result<()> {
        write!(channel, "HTTP/1.1 {} {}\r\n", self.status, self.status_text())?;
        for (name, value) in &self.headers {
            write!(channel, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::empty()
    }
}
