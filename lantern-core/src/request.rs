//! Inbound request model.

use crate::{error::InvalidArgument, headers::Headers};
use std::{any::Any, collections::HashMap, fmt};

/// A transport-agnostic inbound request.
///
/// Everything but the [`Context`] is fixed once the request is built.
#[derive(Debug)]
pub struct Request {
    verb: String,
    resource: String,
    http_version: Option<String>,
    headers: Headers,
    payload: Option<Vec<u8>>,
    context: Context,
}

impl Request {
    /// Create a builder for `Request`.
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    /// The request verb, e.g. `GET`.
    #[must_use]
    pub fn verb(&self) -> &str {
        &self.verb
    }

    /// The absolute request path, without query string.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The HTTP version, e.g. `1.1`.
    #[must_use]
    pub fn http_version(&self) -> Option<&str> {
        self.http_version.as_deref()
    }

    /// Request headers (case-insensitive).
    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The raw Host header, port included.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.headers.get("Host")
    }

    /// The raw body.
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// The body as text, if it is valid UTF-8.
    #[must_use]
    pub fn payload_str(&self) -> Option<&str> {
        self.payload().and_then(|p| std::str::from_utf8(p).ok())
    }

    /// Values shared between every handler that sees this request.
    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Mutable access to the shared context.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.resource)?;
        if let Some(host) = self.host() {
            write!(f, " (host: {host})")?;
        }
        Ok(())
    }
}

/// Builder for `Request`.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    verb: Option<String>,
    resource: Option<String>,
    http_version: Option<String>,
    headers: Headers,
    payload: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Set the verb.
    #[must_use]
    pub fn verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    /// Set the request path. Anything after `?` is dropped.
    #[must_use]
    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        let mut resource = resource.into();
        if let Some(query) = resource.find('?') {
            resource.truncate(query);
        }
        self.resource = Some(resource);
        self
    }

    /// Set the HTTP version.
    #[must_use]
    pub fn http_version(mut self, version: impl Into<String>) -> Self {
        self.http_version = Some(version.into());
        self
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the body.
    #[must_use]
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Build the `Request`.
    ///
    /// Fails when the verb or resource is missing, or the resource is not an
    /// absolute path.
    pub fn build(self) -> Result<Request, InvalidArgument> {
        let verb = self
            .verb
            .filter(|v| !v.is_empty())
            .ok_or(InvalidArgument::Missing("verb"))?;
        let resource = self.resource.ok_or(InvalidArgument::Missing("resource"))?;
        if !resource.starts_with('/') {
            return Err(InvalidArgument::Malformed(format!("resource {resource:?}")));
        }

        Ok(Request {
            verb,
            resource,
            http_version: self.http_version,
            headers: self.headers,
            payload: self.payload,
            context: Context::default(),
        })
    }
}

/// Per-request storage shared across handlers.
///
/// Filters store derived data here (an authenticated user, a parsed cookie)
/// for the handlers that run after them.
#[derive(Default)]
pub struct Context {
    values: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Context {
    /// Store a value under `key`, replacing any previous value.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Box::new(value));
    }

    /// Get a value, if present and of type `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Get a value mutably, if present and of type `T`.
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.values.get_mut(key).and_then(|v| v.downcast_mut::<T>())
    }

    /// Remove a value of type `T`.
    ///
    /// A value stored under `key` with a different type is left in place.
    pub fn remove<T: Any>(&mut self, key: &str) -> Option<T> {
        if !self.values.get(key).is_some_and(|v| v.is::<T>()) {
            return None;
        }
        self.values
            .remove(key)
            .and_then(|v| v.downcast::<T>().ok())
            .map(|v| *v)
    }

    /// Whether a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("keys", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}
