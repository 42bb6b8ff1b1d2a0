//! # Handler
//!
//! A handler is one registered rule: a verb, a host set and a path template
//! bound to a [`Callback`]. It decides whether it handles a request and, if
//! so, runs the callback against the response threaded through the chain.
//!
//! # Invocation Protocol
//!
//! - A handler that does not match returns [`Invocation::NotHandled`] and
//!   hands the response back untouched.
//! - A matching handler creates the default response if the chain has none
//!   yet, then runs its callback.
//! - A filter (verb [`Verb::Any`]) whose callback does not return
//!   [`Flow::Terminate`] passes the response on without completing it.
//! - Any other matching handler completes the response, ending the chain.

use crate::{
    error::{BoxError, DispatchError},
    flow::{Flow, IntoFlow},
    path,
    request::Request,
    response::Response,
    verb::Verb,
};
use std::{fmt, marker::PhantomData, sync::Arc};

/// How many extra path segments a callback accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many segments.
    Fixed(usize),
    /// Any number of segments, including none.
    Variadic,
}

impl Arity {
    /// Whether a callback with this arity accepts `count` segments.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

/// The request/response pair handed to a callback.
pub struct Exchange<'a> {
    /// The request being dispatched.
    pub request: &'a mut Request,
    /// The response accumulated so far.
    pub response: &'a mut Response,
    params: &'a [String],
}

impl<'a> Exchange<'a> {
    pub(crate) fn new(
        request: &'a mut Request,
        response: &'a mut Response,
        params: &'a [String],
    ) -> Self {
        Self {
            request,
            response,
            params,
        }
    }

    /// Positional parameters taken from the path.
    ///
    /// Empty unless their count fits the callback's arity.
    pub fn params(&self) -> &[String] {
        self.params
    }

    /// One positional parameter.
    pub fn param(&self, index: usize) -> Option<&str> {
        self.params.get(index).map(String::as_str)
    }

    /// Stop the chain at this filter, completing the response.
    ///
    /// Return the value from the callback; it has no other effect.
    pub fn disallow(&self) -> Flow {
        Flow::Terminate
    }
}

/// Type-erased callback body.
trait ErasedCallback: Send + Sync {
    fn call(&self, exchange: &mut Exchange<'_>) -> Result<Flow, BoxError>;
}

struct FnCallback<F, R> {
    func: F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> ErasedCallback for FnCallback<F, R>
where
    F: Fn(&mut Exchange<'_>) -> R + Send + Sync,
    R: IntoFlow,
{
    fn call(&self, exchange: &mut Exchange<'_>) -> Result<Flow, BoxError> {
        (self.func)(exchange).into_flow()
    }
}

/// A callback together with its declared [`Arity`].
#[derive(Clone)]
pub struct Callback {
    arity: Arity,
    inner: Arc<dyn ErasedCallback>,
}

impl Callback {
    /// A callback taking no path parameters.
    pub fn new<F, R>(func: F) -> Self
    where
        F: Fn(&mut Exchange<'_>) -> R + Send + Sync + 'static,
        R: IntoFlow + 'static,
    {
        Self::with_arity(Arity::Fixed(0), func)
    }

    /// A callback taking exactly `count` path parameters.
    pub fn with_params<F, R>(count: usize, func: F) -> Self
    where
        F: Fn(&mut Exchange<'_>) -> R + Send + Sync + 'static,
        R: IntoFlow + 'static,
    {
        Self::with_arity(Arity::Fixed(count), func)
    }

    /// A callback taking any number of path parameters.
    pub fn variadic<F, R>(func: F) -> Self
    where
        F: Fn(&mut Exchange<'_>) -> R + Send + Sync + 'static,
        R: IntoFlow + 'static,
    {
        Self::with_arity(Arity::Variadic, func)
    }

    /// A callback with an explicit arity.
    pub fn with_arity<F, R>(arity: Arity, func: F) -> Self
    where
        F: Fn(&mut Exchange<'_>) -> R + Send + Sync + 'static,
        R: IntoFlow + 'static,
    {
        Self {
            arity,
            inner: Arc::new(FnCallback {
                func,
                _output: PhantomData,
            }),
        }
    }

    /// The declared arity.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    fn call(&self, exchange: &mut Exchange<'_>) -> Result<Flow, BoxError> {
        self.inner.call(exchange)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// The result of offering a request to one handler.
#[derive(Debug)]
pub enum Invocation {
    /// The handler did not match; the response is handed back as it was.
    NotHandled(Option<Response>),
    /// The handler ran. The response is complete unless a filter passed it on.
    Handled(Response),
}

impl Invocation {
    /// Whether the handler matched.
    pub fn is_handled(&self) -> bool {
        matches!(self, Invocation::Handled(_))
    }

    /// The response, if there is one.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Invocation::NotHandled(response) => response.as_ref(),
            Invocation::Handled(response) => Some(response),
        }
    }

    /// Consume the invocation, keeping the response.
    pub fn into_response(self) -> Option<Response> {
        match self {
            Invocation::NotHandled(response) => response,
            Invocation::Handled(response) => Some(response),
        }
    }
}

/// One registered rule bound to a callback.
#[derive(Debug, Clone)]
pub struct Handler {
    verb: Verb,
    hosts: Vec<String>,
    path: String,
    callback: Callback,
}

impl Handler {
    /// Create a handler. An empty host list matches every host.
    pub fn new(verb: Verb, path: &str, hosts: Vec<String>, callback: Callback) -> Self {
        Self {
            verb,
            hosts,
            path: path::normalize(path),
            callback,
        }
    }

    /// The registered verb.
    pub fn verb(&self) -> &Verb {
        &self.verb
    }

    /// The normalized path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The host set; empty means any host.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// The callback's arity.
    pub fn arity(&self) -> Arity {
        self.callback.arity()
    }

    /// Whether this handler is a filter.
    pub fn is_filter(&self) -> bool {
        self.verb.is_any()
    }

    /// The match predicate: verb, path and host must all agree.
    pub fn handles(&self, request: &Request) -> bool {
        self.verb.matches(request.verb())
            && self.resource_matches(request.resource())
            && self.host_matches(request)
    }

    /// Positional parameters for `resource`, or an empty list if the template
    /// does not cover it.
    pub fn params(&self, resource: &str) -> Vec<String> {
        path::extract(&self.path, resource).unwrap_or_default()
    }

    /// Offer a request to this handler.
    ///
    /// `response` is the response accumulated by earlier handlers in the
    /// chain, if any.
    pub fn invoke(
        &self,
        request: &mut Request,
        response: Option<Response>,
    ) -> Result<Invocation, DispatchError> {
        if !self.handles(request) {
            return Ok(Invocation::NotHandled(response));
        }

        let mut response = response.unwrap_or_else(Response::html);
        let params = self.params(request.resource());
        let args: &[String] = if self.arity().accepts(params.len()) {
            &params
        } else {
            &[]
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            verb = %self.verb,
            path = %self.path,
            params = ?args,
            "Handler matched"
        );

        let flow = {
            let mut exchange = Exchange::new(request, &mut response, args);
            self.callback
                .call(&mut exchange)
                .map_err(DispatchError::Callback)?
        };

        if self.is_filter() && flow != Flow::Terminate {
            return Ok(Invocation::Handled(response));
        }

        response.complete();
        Ok(Invocation::Handled(response))
    }

    fn resource_matches(&self, resource: &str) -> bool {
        path::extract(&self.path, resource).is_some_and(|params| self.arity().accepts(params.len()))
    }

    fn host_matches(&self, request: &Request) -> bool {
        if self.hosts.is_empty() {
            return true;
        }
        let Some(host) = request.host() else {
            return false;
        };
        let host = host.split(':').next().unwrap_or(host).trim();
        self.hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(verb: &str, path: &str, host: Option<&str>) -> Request {
        let mut builder = Request::builder().verb(verb).resource(path).http_version("1.1");
        if let Some(host) = host {
            builder = builder.header("Host", host);
        }
        builder.build().unwrap()
    }

    fn hello_world() -> Callback {
        Callback::new(|http| http.response.push_str("<html><body>hello world</body></html>"))
    }

    #[test]
    fn test_serves_root() {
        let handler = Handler::new(Verb::Get, "/", vec![], hello_world());
        let mut req = request("GET", "/", None);

        assert!(handler.handles(&req));
        let response = handler.invoke(&mut req, None).unwrap().into_response().unwrap();
        assert!(response.is_complete());
        assert_eq!(
            response.to_string(),
            "HTTP/1.1 200 OK\nContent-Type: text/html\n\n<html><body>hello world</body></html>\n"
        );
    }

    #[test]
    fn test_host_with_port_matches() {
        let handler = Handler::new(Verb::Get, "/", vec!["test.com".into()], hello_world());
        assert!(handler.handles(&request("GET", "/", Some("test.com:2000"))));
        assert!(!handler.handles(&request("GET", "/", Some("other.com"))));
        assert!(!handler.handles(&request("GET", "/", None)));
    }

    #[test]
    fn test_fixed_param_prefix_match() {
        let handler = Handler::new(
            Verb::Get,
            "/hello",
            vec![],
            Callback::with_params(1, |http| {
                let name = http.param(0).unwrap_or_default().to_string();
                http.response
                    .push_str(&format!("<html><body>{name}</body></html>"));
            }),
        );

        let mut req = request("GET", "/hello/test", None);
        assert!(handler.handles(&req));
        let response = handler.invoke(&mut req, None).unwrap().into_response().unwrap();
        assert_eq!(response.body(), "<html><body>test</body></html>");

        // Wrong count, and the exact path has zero parameters.
        assert!(!handler.handles(&request("GET", "/hello/a/b", None)));
        assert!(!handler.handles(&request("GET", "/hello", None)));
    }

    #[test]
    fn test_variadic_prefix_match() {
        let handler = Handler::new(
            Verb::Get,
            "/hello/test",
            vec![],
            Callback::variadic(|_http| {}),
        );
        assert!(handler.handles(&request("GET", "/hello/test/world", None)));
        assert!(handler.handles(&request("GET", "/hello/test", None)));
        assert!(!handler.handles(&request("GET", "/hello/world", None)));
        assert_eq!(
            handler.params("/hello/test/world/again"),
            vec!["world".to_string(), "again".to_string()]
        );
    }

    #[test]
    fn test_exact_match_requires_zero_fixed_params() {
        let handler = Handler::new(Verb::Get, "/hello/test", vec![], Callback::with_params(1, |_| {}));
        assert!(!handler.handles(&request("GET", "/hello/test", None)));
    }

    #[test]
    fn test_verb_mismatch() {
        let handler = Handler::new(Verb::Get, "/test", vec![], hello_world());
        assert!(!handler.handles(&request("POST", "/test", None)));
    }

    #[test]
    fn test_not_handled_returns_response_untouched() {
        let handler = Handler::new(Verb::Post, "/test", vec![], hello_world());
        let mut previous = Response::html();
        previous.push_str("kept");

        let invocation = handler
            .invoke(&mut request("GET", "/test", None), Some(previous.clone()))
            .unwrap();
        assert!(!invocation.is_handled());
        assert_eq!(invocation.into_response(), Some(previous));
    }

    #[test]
    fn test_uses_supplied_response() {
        let handler = Handler::new(
            Verb::Get,
            "/test",
            vec![],
            Callback::new(|http| http.response.push_str("test")),
        );
        let mut supplied = Response::new(crate::Status::OK);
        supplied.push_str("some stuff here ");

        let response = handler
            .invoke(&mut request("GET", "/test", Some("localhost:2000")), Some(supplied))
            .unwrap()
            .into_response()
            .unwrap();
        assert_eq!(response.body(), "some stuff here test");
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_filter_passes_through_by_default() {
        let handler = Handler::new(
            Verb::Any,
            "/filtertest",
            vec![],
            Callback::variadic(|http| http.response.push_str("allowed")),
        );
        let response = handler
            .invoke(&mut request("GET", "/filtertest", None), None)
            .unwrap()
            .into_response()
            .unwrap();
        assert_eq!(response.body(), "allowed");
        assert!(!response.is_complete());
    }

    #[test]
    fn test_filter_disallow_completes() {
        let handler = Handler::new(
            Verb::Any,
            "/test",
            vec![],
            Callback::variadic(|http| {
                http.response.push_str("Not allowed");
                http.disallow()
            }),
        );
        let response = handler
            .invoke(&mut request("DELETE", "/test", None), None)
            .unwrap()
            .into_response()
            .unwrap();
        assert!(response.is_complete());
        assert_eq!(response.body(), "Not allowed");
    }

    #[test]
    fn test_non_filter_completes_even_when_continuing() {
        let handler = Handler::new(Verb::Get, "/", vec![], Callback::new(|_| Flow::Continue));
        let response = handler
            .invoke(&mut request("GET", "/", None), None)
            .unwrap()
            .into_response()
            .unwrap();
        assert!(response.is_complete());
    }

    #[test]
    fn test_callback_error_propagates() {
        let handler = Handler::new(
            Verb::Get,
            "/",
            vec![],
            Callback::new(|_| -> Result<(), BoxError> { Err("database offline".into()) }),
        );
        let err = handler.invoke(&mut request("GET", "/", None), None).unwrap_err();
        assert!(matches!(err, DispatchError::Callback(_)));
    }
}
