//! Lenient parsing of text-form requests.

use lantern_core::{InvalidArgument, Request};

/// Parse a request such as `GET /index.html HTTP/1.1\nHost: x\n\nbody`.
///
/// Repeated spaces in the request line are ignored, `\r` is dropped, and
/// header values are trimmed. A header line without `:` is kept with an empty
/// value. Everything after the first blank line is the
/// payload, with its lines joined by `\n`.
pub fn parse_request(text: &str) -> Result<Request, InvalidArgument> {
    let text = text.replace('\r', "");
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut lines = lines.into_iter();
    let first = lines.next().unwrap_or_default();
    let mut parts = first.split_whitespace();

    let mut builder = Request::builder();
    if let Some(verb) = parts.next() {
        builder = builder.verb(verb);
    }
    if let Some(resource) = parts.next() {
        builder = builder.resource(resource);
    }
    if let Some(version) = parts.next().and_then(|p| p.split_once('/')) {
        builder = builder.http_version(version.1);
    }

    let mut payload: Option<Vec<&str>> = None;
    for line in lines {
        if let Some(body) = payload.as_mut() {
            body.push(line);
        } else if line.trim().is_empty() {
            payload = Some(Vec::new());
        } else if let Some((name, value)) = line.split_once(':') {
            builder = builder.header(name, value.trim());
        } else {
            builder = builder.header(line, "");
        }
    }

    if let Some(body) = payload.filter(|body| !body.is_empty()) {
        builder = builder.payload(body.join("\n"));
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_line() {
        let request = parse_request("GET   /index.html  HTTP/1.1").unwrap();
        assert_eq!(request.verb(), "GET");
        assert_eq!(request.resource(), "/index.html");
        assert_eq!(request.http_version(), Some("1.1"));
        assert!(request.payload().is_none());
    }

    #[test]
    fn test_parse_headers_and_payload() {
        let request = parse_request(
            "POST /notes HTTP/1.0\r\nHost: test.com:2000\r\nX-Time: 12:30\r\n\r\nline one\nline two\n",
        )
        .unwrap();
        assert_eq!(request.host(), Some("test.com:2000"));
        assert_eq!(request.headers().get("x-time"), Some("12:30"));
        assert_eq!(request.payload_str(), Some("line one\nline two"));
    }

    #[test]
    fn test_header_without_colon() {
        let request = parse_request("GET / HTTP/1.1\nDNT\nHost: test.com").unwrap();
        assert_eq!(request.headers().get("DNT"), Some(""));
        assert_eq!(request.host(), Some("test.com"));
    }

    #[test]
    fn test_missing_resource() {
        assert_eq!(
            parse_request("GET").unwrap_err(),
            InvalidArgument::Missing("resource")
        );
        assert_eq!(parse_request("").unwrap_err(), InvalidArgument::Missing("verb"));
    }
}
