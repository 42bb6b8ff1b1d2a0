//! Conversions between host transports and the dispatch model.
//!
//! - [`text`]: lenient parsing of a request written out as text
//! - `http` (feature `http`): conversion to and from the `http` crate types
//! - `service` (feature `tower`): a `tower::Service` over a router

use lantern_core::InvalidArgument;
use thiserror::Error;

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "tower")]
pub mod service;
pub mod text;

/// Errors raised while converting a transport request or response.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// A header name or value was not representable.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The converted request was missing a required part.
    #[error(transparent)]
    Request(#[from] InvalidArgument),

    /// The `http` crate rejected the converted response.
    #[cfg(feature = "http")]
    #[error("http conversion failed: {0}")]
    Http(#[from] ::http::Error),
}
