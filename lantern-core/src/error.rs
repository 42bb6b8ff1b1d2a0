//! Error types for Lantern.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Terminal failures that cross the dispatch boundary
//! - [`InvalidArgument`] - Usage errors when building requests and responses
//! - [`StatusError`] - Unsupported status codes

use thiserror::Error;

/// A boxed error type for callback failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that end a dispatch.
///
/// A handler rejecting a request is not an error; the router simply tries the
/// next one. Only these two conditions leave [`Router::route`].
///
/// [`Router::route`]: crate::Router::route
#[derive(Error, Debug)]
pub enum DispatchError {
    /// Every handler was tried and none completed the response.
    #[error("handler not found for request: {verb} {path} (host: {})", display_host(.host))]
    NoMatchingHandler {
        /// The request verb.
        verb: String,
        /// The request path.
        path: String,
        /// The Host header, if the request carried one.
        host: Option<String>,
    },

    /// A callback failed while producing the response.
    #[error("handler callback failed: {0}")]
    Callback(#[source] BoxError),
}

impl DispatchError {
    /// Whether this is the not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchError::NoMatchingHandler { .. })
    }
}

fn display_host(host: &Option<String>) -> &str {
    host.as_deref().unwrap_or("none")
}

/// A required component was missing or malformed.
///
/// This is a programming error, expected to surface while configuring or
/// testing rather than while serving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A required component was not supplied.
    #[error("{0} cannot be null")]
    Missing(&'static str),

    /// A component was supplied in an unusable form.
    #[error("malformed {0}")]
    Malformed(String),
}

/// Errors from the status vocabulary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusError {
    /// The code has no registered reason phrase.
    #[error("HTTP status code not supported: {0}")]
    Unsupported(u16),
}
