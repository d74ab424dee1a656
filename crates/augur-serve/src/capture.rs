//! Request capture from raw HTTP bytes.

use std::collections::HashMap;

use augur_http::{Method, Params, Request};

use crate::error::CaptureError;

/// Builds a [`Request`] from one raw HTTP/1.1 request.
///
/// The request line gives the method and target; the target path is
/// percent-decoded and the query string split off. Headers are consulted
/// for cookies and the body's content type, then discarded; the request
/// value object does not carry them. Query parameters and
/// `application/x-www-form-urlencoded` body fields merge into a single
/// parameter map, with body fields winning on key collision.
pub fn capture(raw: &[u8]) -> Result<Request, CaptureError> {
    let text = std::str::from_utf8(raw).map_err(|_| CaptureError::InvalidEncoding)?;
    let (head, body) = text.split_once("\r\n\r\n").unwrap_or((text, ""));

    let mut lines = head.lines();
    let request_line = lines.next().ok_or(CaptureError::MalformedRequestLine)?;

    let mut parts = request_line.split_whitespace();
    let method = parts.next().ok_or(CaptureError::MalformedRequestLine)?;
    let target = parts.next().ok_or(CaptureError::MalformedRequestLine)?;

    let method =
        Method::from_str(method).ok_or_else(|| CaptureError::UnknownMethod(method.to_string()))?;

    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let path = percent_decode(path);

    let headers: HashMap<String, String> = lines
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some((name.trim().to_lowercase(), value.trim().to_string()))
        })
        .collect();

    let cookies = headers.get("cookie").map(String::as_str).map_or_else(
        HashMap::new,
        parse_cookies,
    );

    let mut params = parse_query(query);
    let form_body = headers
        .get("content-type")
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));
    if form_body && !body.is_empty() {
        params.merge(parse_query(body));
    }

    Ok(Request::new(method, path)
        .with_params(params)
        .with_cookies(cookies)
        .with_body(body))
}

/// Parses `key=value` pairs separated by `&`, percent-decoding both sides.
fn parse_query(query: &str) -> Params {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            let value = parts.next().unwrap_or("");
            Some((percent_decode(key), percent_decode(value)))
        })
        .collect()
}

/// Parses a `Cookie` header into name/value pairs.
fn parse_cookies(header: &str) -> HashMap<String, String> {
    header
        .split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            Some((name.trim().to_string(), percent_decode(value.trim())))
        })
        .collect()
}

/// Simple URL decoding.
fn percent_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if hex.len() == 2 {
                if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                    result.push(byte as char);
                    continue;
                }
            }
            result.push('%');
            result.push_str(&hex);
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_request_line_and_query() {
        let raw = b"GET /users/42?page=2&q=hello+world HTTP/1.1\r\nHost: localhost\r\n\r\n";
        let request = capture(raw).unwrap();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.uri().as_str(), "/users/42");
        assert_eq!(request.param("page"), Some("2"));
        assert_eq!(request.param("q"), Some("hello world"));
    }

    #[test]
    fn test_capture_decodes_the_path() {
        let raw = b"GET /files/a%20b HTTP/1.1\r\n\r\n";
        let request = capture(raw).unwrap();
        assert_eq!(request.uri().as_str(), "/files/a b");
    }

    #[test]
    fn test_form_body_wins_over_query_on_collision() {
        let raw = b"POST /submit?name=query&keep=1 HTTP/1.1\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\
            Content-Length: 9\r\n\r\nname=body";
        let request = capture(raw).unwrap();

        assert_eq!(request.param("name"), Some("body"));
        assert_eq!(request.param("keep"), Some("1"));
        assert_eq!(request.body(), "name=body");
    }

    #[test]
    fn test_non_form_body_is_kept_raw_and_unparsed() {
        let raw = b"POST /submit HTTP/1.1\r\n\
            Content-Type: application/json\r\n\r\n{\"name\":\"x\"}";
        let request = capture(raw).unwrap();

        assert!(request.params().is_empty());
        assert_eq!(request.body(), "{\"name\":\"x\"}");
    }

    #[test]
    fn test_cookies_are_parsed() {
        let raw = b"GET / HTTP/1.1\r\nCookie: session=abc123; theme=dark\r\n\r\n";
        let request = capture(raw).unwrap();

        assert_eq!(request.cookie("session"), Some("abc123"));
        assert_eq!(request.cookie("theme"), Some("dark"));
    }

    #[test]
    fn test_unknown_method_is_an_error() {
        let raw = b"BREW /coffee HTTP/1.1\r\n\r\n";
        assert!(matches!(
            capture(raw),
            Err(CaptureError::UnknownMethod(method)) if method == "BREW"
        ));
    }

    #[test]
    fn test_malformed_request_line_is_an_error() {
        assert!(matches!(
            capture(b"GET\r\n\r\n"),
            Err(CaptureError::MalformedRequestLine)
        ));
    }

    #[test]
    fn test_info_method_is_captured() {
        let request = capture(b"INFO /status HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.method(), Method::Info);
    }
}
