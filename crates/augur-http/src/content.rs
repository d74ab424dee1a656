//! Response payload: headers plus body data.

use std::io::{self, Write};

use crate::{Communicable, Header};

/// The payload of an outgoing response.
#[derive(Debug, Clone, Default)]
pub struct Content {
    header: Header,
    data: String,
}

impl Content {
    /// Creates a payload from a header set and body data.
    pub fn new(header: Header, data: impl Into<String>) -> Self {
        Self {
            header,
            data: data.into(),
        }
    }

    /// Creates an empty payload with status 200.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the header set.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the header set mutably.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the body data.
    pub fn data(&self) -> &str {
        &self.data
    }
}

impl Communicable for Content {
    /// Emits the status line, the headers, a computed `Content-Length` when
    /// none was set explicitly, the blank line and the body data.
    fn send(&self, channel: &mut dyn Write) -> io::Result<()> {
        self.header.send(channel)?;
        if !self.header.has("Content-Length") {
            write!(channel, "Content-Length: {}\r\n", self.data.len())?;
        }
        write!(channel, "\r\n")?;
        channel.write_all(self.data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_computes_content_length() {
        let mut header = Header::empty();
        header.set("Content-Type", "text/plain");
        let content = Content::new(header, "hello");

        let mut wire = Vec::new();
        content.send(&mut wire).unwrap();
        let text = String::from_utf8(wire).unwrap();

        assert!(text.contains("Content-Length: 5\r\n"));
        assert!(text.ends_with("\r\n\r\nhello"));
    }

    #[test]
    fn test_send_keeps_explicit_content_length() {
        let mut header = Header::empty();
        header.set("Content-Length", "0");
        let content = Content::new(header, "");

        let mut wire = Vec::new();
        content.send(&mut wire).unwrap();
        let text = String::from_utf8(wire).unwrap();

        assert_eq!(text.matches("Content-Length").count(), 1);
    }
}
