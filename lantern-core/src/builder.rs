//! # Builder
//!
//! Handlers are registered through a [`HandlerBuilder`]. Every builder derived
//! from one root, whether by `+`, [`path`](HandlerBuilder::path) or
//! [`hosts`](HandlerBuilder::hosts), appends into the same [`HandlerList`], so
//! the final order is declaration order at any nesting depth.
//!
//! ```rust,ignore
//! let list = HandlerBuilder::new().path("/notes", |notes| {
//!     notes.filter("/", |http| http.response.push_str("<!-- notes -->"));
//!     notes.get("/new", |http| http.response.push_str("new note"));
//! });
//! let router = list.to_router();
//! ```

use crate::{
    flow::IntoFlow,
    handler::{Callback, Exchange, Handler},
    path,
    router::Router,
    verb::Verb,
};
use std::{cell::RefCell, fmt, ops::Add, rc::Rc, sync::Arc};

/// The ordered handler sequence shared by every builder of one configuration.
///
/// Append-only while configuring. Cloning shares the same sequence.
#[derive(Clone, Default)]
pub struct HandlerList {
    inner: Rc<RefCell<Vec<Arc<Handler>>>>,
}

impl HandlerList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// The handler at `index`, in registration order.
    pub fn get(&self, index: usize) -> Option<Arc<Handler>> {
        self.inner.borrow().get(index).cloned()
    }

    /// The most recently registered handler.
    pub fn last(&self) -> Option<Arc<Handler>> {
        self.inner.borrow().last().cloned()
    }

    /// A snapshot of the current sequence.
    pub fn to_vec(&self) -> Vec<Arc<Handler>> {
        self.inner.borrow().clone()
    }

    /// Freeze the current sequence into a [`Router`].
    pub fn to_router(&self) -> Router {
        Router::from(self.clone())
    }

    pub(crate) fn push(&self, handler: Handler) -> Arc<Handler> {
        let handler = Arc::new(handler);
        self.inner.borrow_mut().push(Arc::clone(&handler));
        handler
    }
}

impl fmt::Debug for HandlerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.borrow().iter()).finish()
    }
}

/// A registration scope: a path prefix and a host set over a shared list.
#[derive(Debug, Clone)]
pub struct HandlerBuilder {
    handlers: HandlerList,
    url_part: String,
    hosts: Vec<String>,
}

macro_rules! verb_helpers {
    ($($(#[$doc:meta])* $name:ident => $verb:expr;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<F, R>(&self, segment: &str, func: F) -> Arc<Handler>
            where
                F: Fn(&mut Exchange<'_>) -> R + Send + Sync + 'static,
                R: IntoFlow + 'static,
            {
                self.on($verb, segment, Callback::new(func))
            }
        )*
    };
}

impl HandlerBuilder {
    /// A root builder at `/` matching every host, over a fresh list.
    pub fn new() -> Self {
        Self::with_list(HandlerList::new())
    }

    /// A root builder appending into an existing list.
    pub fn with_list(handlers: HandlerList) -> Self {
        Self {
            handlers,
            url_part: "/".to_string(),
            hosts: Vec::new(),
        }
    }

    /// The shared list.
    pub fn handlers(&self) -> &HandlerList {
        &self.handlers
    }

    /// The composed path prefix.
    pub fn url_part(&self) -> &str {
        &self.url_part
    }

    /// The host set registrations carry. Empty means any host.
    pub fn host_set(&self) -> &[String] {
        &self.hosts
    }

    /// A child builder with `segment` appended to the path. Keeps the host set.
    pub fn join(&self, segment: &str) -> HandlerBuilder {
        Self {
            handlers: self.handlers.clone(),
            url_part: path::compose(&self.url_part, segment),
            hosts: self.hosts.clone(),
        }
    }

    /// Register a handler for `verb` at `segment` under this scope.
    pub fn on(&self, verb: Verb, segment: &str, callback: Callback) -> Arc<Handler> {
        let path = path::compose(&self.url_part, segment);
        self.handlers
            .push(Handler::new(verb, &path, self.hosts.clone(), callback))
    }

    verb_helpers! {
        /// Register a `GET` handler.
        get => Verb::Get;
        /// Register a `POST` handler.
        post => Verb::Post;
        /// Register a `PUT` handler.
        put => Verb::Put;
        /// Register a `DELETE` handler.
        delete => Verb::Delete;
        /// Register a `HEAD` handler.
        head => Verb::Head;
        /// Register an `OPTIONS` handler.
        options => Verb::Options;
        /// Register a `TRACE` handler.
        trace => Verb::Trace;
    }

    /// Register a filter at `segment`.
    ///
    /// The filter matches every verb and any number of trailing segments. It
    /// passes the request on unless its callback returns
    /// [`Exchange::disallow`].
    pub fn filter<F, R>(&self, segment: &str, func: F) -> Arc<Handler>
    where
        F: Fn(&mut Exchange<'_>) -> R + Send + Sync + 'static,
        R: IntoFlow + 'static,
    {
        self.on(Verb::Any, segment, Callback::variadic(func))
    }

    /// Run `configure` against a child scope at `segment`.
    pub fn path<F>(&self, segment: &str, configure: F) -> HandlerList
    where
        F: FnOnce(&HandlerBuilder),
    {
        configure(&self.join(segment));
        self.handlers.clone()
    }

    /// Run `configure` against a child scope restricted to `hosts`.
    ///
    /// The child keeps this scope's path. Hosts are deduplicated in insertion
    /// order.
    pub fn hosts<I, S, F>(&self, hosts: I, configure: F) -> HandlerList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(&HandlerBuilder),
    {
        let mut set: Vec<String> = Vec::new();
        for host in hosts {
            let host = host.into();
            if !set.iter().any(|h| h.eq_ignore_ascii_case(&host)) {
                set.push(host);
            }
        }

        let child = Self {
            handlers: self.handlers.clone(),
            url_part: self.url_part.clone(),
            hosts: set,
        };
        configure(&child);
        self.handlers.clone()
    }
}

impl Default for HandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Add<&str> for &HandlerBuilder {
    type Output = HandlerBuilder;

    fn add(self, segment: &str) -> HandlerBuilder {
        self.join(segment)
    }
}

impl fmt::Display for HandlerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url_part)
    }
}
