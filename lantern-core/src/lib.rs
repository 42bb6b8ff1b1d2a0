//! # lantern-core
//!
//! Core dispatch engine for the Lantern request router.
//!
//! This crate has minimal dependencies and holds everything needed to
//! register handlers and dispatch requests against them. Transport adapters
//! and standard filters live in `lantern-std`.
//!
//! # Layers
//!
//! ## Model ([`Request`], [`Response`], [`Status`])
//!
//! Transport-agnostic values. A `Request` is immutable apart from its
//! [`Context`], which filters use to hand derived data to later handlers. A
//! `Response` is an accumulator: handlers append to its body, set headers and
//! status, and the engine marks it complete.
//!
//! ## Handler ([`Handler`])
//!
//! One registered rule: a verb, a host set and a path template bound to a
//! [`Callback`]. The handler owns the match predicate and the invocation
//! protocol, including the filter pass-through rule.
//!
//! ## Builder ([`HandlerBuilder`])
//!
//! Composes nested, host-scoped and path-scoped registrations into a single
//! shared [`HandlerList`]. Declaration order across every nested scope is the
//! final priority order.
//!
//! ## Router ([`Router`])
//!
//! Evaluates the frozen list against one request, threading one response
//! through every handler until one of them completes it.
//!
//! # Error Types
//!
//! - [`DispatchError`] - Terminal dispatch failures (not found, callback failure)
//! - [`InvalidArgument`] - Missing or malformed required components
//! - [`StatusError`] - Unsupported status codes

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod builder;
mod error;
mod flow;
mod handler;
mod headers;
mod path;
mod request;
mod response;
mod router;
mod status;
mod verb;

// Re-exports
pub use builder::{HandlerBuilder, HandlerList};
pub use error::{BoxError, DispatchError, InvalidArgument, StatusError};
pub use flow::{Flow, IntoFlow};
pub use handler::{Arity, Callback, Exchange, Handler, Invocation};
pub use headers::Headers;
pub use request::{Context, Request, RequestBuilder};
pub use response::Response;
pub use router::Router;
pub use status::Status;
pub use verb::Verb;
