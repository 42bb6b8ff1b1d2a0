//! # Router
//!
//! The router evaluates a frozen handler sequence against one request. One
//! response is threaded through the chain: filters may add to it and pass it
//! on, and the first handler that completes it ends the chain.
//!
//! "Not handled" never ends the chain; only completion does. Registration
//! order is therefore priority order.

use crate::{
    builder::HandlerList,
    error::DispatchError,
    handler::{Handler, Invocation},
    request::Request,
    response::Response,
    status::Status,
};
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

const FAILURE_MESSAGE: &str = "An internal error occurred. We'll fix the problem shortly.";

/// Dispatches requests against an immutable, ordered handler list.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct Router {
    handlers: Arc<[Arc<Handler>]>,
}

impl Router {
    /// Create a router over `handlers`, in priority order.
    pub fn new<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = Arc<Handler>>,
    {
        Self {
            handlers: handlers.into_iter().collect(),
        }
    }

    /// The handlers in priority order.
    pub fn handlers(&self) -> &[Arc<Handler>] {
        &self.handlers
    }

    /// Number of handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the router has no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the chain for `request`.
    ///
    /// Returns the first completed response, or
    /// [`DispatchError::NoMatchingHandler`] if the chain runs out.
    pub fn route(&self, request: &mut Request) -> Result<Response, DispatchError> {
        let mut response = None;

        for handler in self.handlers.iter() {
            match handler.invoke(request, response.take())? {
                Invocation::NotHandled(previous) => response = previous,
                Invocation::Handled(r) if r.is_complete() => return Ok(r),
                Invocation::Handled(r) => response = Some(r),
            }
        }

        Err(DispatchError::NoMatchingHandler {
            verb: request.verb().to_string(),
            path: request.resource().to_string(),
            host: request.host().map(str::to_string),
        })
    }

    /// Run the chain and convert every failure into a response.
    ///
    /// Not found becomes a 404 page. A callback error or panic becomes a 503
    /// page and is logged.
    pub fn respond(&self, request: &mut Request) -> Response {
        let summary = request.to_string();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.route(request)));

        let mut response = match outcome {
            Ok(Ok(response)) => return response,
            Ok(Err(err)) if err.is_not_found() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(request = %summary, "No handler completed the request");
                Response::error_page(Status::NOT_FOUND, &escape_html(&err.to_string()))
            }
            Ok(Err(err)) => {
                #[cfg(feature = "tracing")]
                tracing::error!(request = %summary, error = %err, "Handler failed");
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                Response::error_page(Status::SERVICE_UNAVAILABLE, FAILURE_MESSAGE)
            }
            Err(payload) => {
                let cause = panic_message(payload.as_ref());
                #[cfg(feature = "tracing")]
                tracing::error!(request = %summary, error = %cause, "Handler panicked");
                #[cfg(not(feature = "tracing"))]
                let _ = cause;
                Response::error_page(Status::SERVICE_UNAVAILABLE, FAILURE_MESSAGE)
            }
        };

        #[cfg(not(feature = "tracing"))]
        let _ = summary;

        response.complete();
        response
    }
}

impl From<HandlerList> for Router {
    fn from(list: HandlerList) -> Self {
        Self::new(list.to_vec())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "panic"
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
