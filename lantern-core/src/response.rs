//! Response accumulator.

use crate::{error::InvalidArgument, headers::Headers, status::Status};
use std::fmt;

/// The content type every fresh handler response starts with.
pub(crate) const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// A mutable response, built up by the handlers in a chain.
///
/// The body only grows through [`push_str`](Self::push_str) (or
/// [`fmt::Write`]); [`set_body`](Self::set_body) is the one explicit
/// replacement. The completion flag can only be set by the dispatch engine
/// and is never cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    http_version: String,
    status: Status,
    headers: Headers,
    body: String,
    complete: bool,
}

impl Response {
    /// Create an empty HTTP/1.1 response with the given status.
    pub fn new(status: Status) -> Self {
        Self {
            http_version: "1.1".to_string(),
            status,
            headers: Headers::new(),
            body: String::new(),
            complete: false,
        }
    }

    /// Create an empty response with an explicit HTTP version.
    pub fn try_new(http_version: impl Into<String>, status: Status) -> Result<Self, InvalidArgument> {
        let http_version = http_version.into();
        if http_version.is_empty() {
            return Err(InvalidArgument::Missing("http_version"));
        }
        Ok(Self {
            http_version,
            ..Self::new(status)
        })
    }

    /// The default response a handler creates when the chain has none yet:
    /// 200 with an HTML content type.
    pub fn html() -> Self {
        let mut response = Self::new(Status::OK);
        response.set_header("Content-Type", DEFAULT_CONTENT_TYPE);
        response
    }

    /// An HTML error page with the given status.
    pub fn error_page(status: Status, message: &str) -> Self {
        let mut response = Self::new(status);
        response.set_header("Content-Type", DEFAULT_CONTENT_TYPE);
        response.set_body(format!(
            "<html><head><title>{} Error</title></head><body>{}</body></html>",
            status.code(),
            message
        ));
        response
    }

    /// The HTTP version, e.g. `1.1`.
    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    /// Set the HTTP version.
    pub fn set_http_version(&mut self, version: impl Into<String>) {
        self.http_version = version.into();
    }

    /// The status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Set the status.
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// The headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Mutable access to the headers.
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Set one header.
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name, value);
    }

    /// Set several headers at once.
    pub fn set_headers<K, V, I>(&mut self, headers: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.headers.extend(headers);
    }

    /// The body so far.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Append to the body.
    pub fn push_str(&mut self, text: &str) {
        self.body.push_str(text);
    }

    /// Replace the body.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Consume the response, keeping the body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Redirect to `url` with 302.
    pub fn redirect(&mut self, url: impl Into<String>) {
        self.status = Status::FOUND;
        self.headers.insert("Location", url);
    }

    /// Whether the response is final.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn complete(&mut self) {
        self.complete = true;
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(Status::OK)
    }
}

impl fmt::Write for Response {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/{} {}", self.http_version, self.status)?;
        for (name, value) in self.headers.iter() {
            write!(f, "\n{name}: {value}")?;
        }
        write!(f, "\n\n{}\n", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;

    #[test]
    fn test_render_with_headers() {
        let mut response = Response::new(Status::OK);
        response.set_headers([
            ("Content-Type", "text/html; charset=UTF-8"),
            ("Server", "lantern"),
        ]);
        response.set_body("<html><body><h1>It works</h1></body></html>");

        assert_eq!(
            response.to_string(),
            "HTTP/1.1 200 OK\nContent-Type: text/html; charset=UTF-8\nServer: lantern\n\n\
             <html><body><h1>It works</h1></body></html>\n"
        );
    }

    #[test]
    fn test_append_body() {
        let mut response = Response::new(Status::OK);
        response.push_str("hello");
        write!(response, " {}", "world").unwrap();
        assert_eq!(response.to_string(), "HTTP/1.1 200 OK\n\nhello world\n");
    }

    #[test]
    fn test_settable_version_and_status() {
        let mut response = Response::new(Status::OK);
        response.set_http_version("1.0");
        response.set_status(Status::BAD_REQUEST);
        assert_eq!(response.to_string(), "HTTP/1.0 400 Bad Request\n\n\n");
    }

    #[test]
    fn test_redirect() {
        let mut response = Response::new(Status::OK);
        response.redirect("http://www.stuff.com");
        assert_eq!(
            response.to_string(),
            "HTTP/1.1 302 Moved Temporarily\nLocation: http://www.stuff.com\n\n\n"
        );
    }

    #[test]
    fn test_html_default() {
        let response = Response::html();
        assert_eq!(response.status(), Status::OK);
        assert_eq!(response.headers().get("Content-Type"), Some("text/html"));
        assert!(!response.is_complete());
    }

    #[test]
    fn test_completion_is_sticky() {
        let mut response = Response::default();
        response.complete();
        response.push_str("more");
        assert!(response.is_complete());
    }

    #[test]
    fn test_try_new_requires_version() {
        assert_eq!(
            Response::try_new("", Status::OK),
            Err(InvalidArgument::Missing("http_version"))
        );
        assert_eq!(
            Response::try_new("1.0", Status::OK).unwrap().http_version(),
            "1.0"
        );
    }
}
