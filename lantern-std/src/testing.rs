//! Testing utilities for Lantern.
//!
//! # Features
//!
//! - [`request_for`]: build a request in one call
//! - [`html_response_for`]: the rendered text of a default HTML response
//! - [`RecordingCallback`]: a callback that records the parameters of every call

use lantern_core::{Arity, Callback, Flow, Request};
use std::sync::{Arc, Mutex};

// ============================================================================
// Fixtures
// ============================================================================

/// Build an HTTP/1.1 request for `path`, with a `Host` header if `host` is set.
///
/// # Panics
///
/// Panics if `verb` is empty or `path` is not absolute.
pub fn request_for(path: &str, host: Option<&str>, verb: &str) -> Request {
    let mut builder = Request::builder()
        .verb(verb)
        .resource(path)
        .http_version("1.1");
    if let Some(host) = host {
        builder = builder.header("Host", host);
    }
    builder.build().expect("test request should be valid")
}

/// The rendering of a 200 response with the default HTML content type.
pub fn html_response_for(html: &str) -> String {
    format!("HTTP/1.1 200 OK\nContent-Type: text/html\n\n{html}\n")
}

// ============================================================================
// Recording Callback
// ============================================================================

/// A callback that records the parameters of every invocation.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingCallback::new();
/// builder.on(Verb::Get, "/hello", recorder.callback(Arity::Fixed(1)));
///
/// router.route(&mut request_for("/hello/test", None, "GET"))?;
/// assert_eq!(recorder.calls(), vec![vec!["test".to_string()]]);
/// ```
#[derive(Clone)]
pub struct RecordingCallback {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    flow: Flow,
}

impl RecordingCallback {
    /// Create a recorder whose callbacks return `Continue`.
    pub fn new() -> Self {
        Self::with_flow(Flow::Continue)
    }

    /// Create a recorder whose callbacks return `flow`.
    pub fn with_flow(flow: Flow) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            flow,
        }
    }

    /// The recorded parameter lists, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear the recorded calls.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// A callback with `arity` that records into this recorder.
    pub fn callback(&self, arity: Arity) -> Callback {
        let calls = Arc::clone(&self.calls);
        let flow = self.flow;
        Callback::with_arity(arity, move |http| {
            calls.lock().unwrap().push(http.params().to_vec());
            flow
        })
    }
}

impl Default for RecordingCallback {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_core::{HandlerBuilder, Verb};

    #[test]
    fn test_records_params() {
        let recorder = RecordingCallback::new();
        let root = HandlerBuilder::new();
        root.on(Verb::Get, "/hello", recorder.callback(Arity::Fixed(1)));
        let router = root.handlers().to_router();

        router
            .route(&mut request_for("/hello/test", None, "GET"))
            .unwrap();
        assert_eq!(recorder.calls(), vec![vec!["test".to_string()]]);
        assert_eq!(recorder.count(), 1);
    }

    #[test]
    fn test_html_response_for() {
        assert_eq!(
            html_response_for("<p>hi</p>"),
            "HTTP/1.1 200 OK\nContent-Type: text/html\n\n<p>hi</p>\n"
        );
    }
}
