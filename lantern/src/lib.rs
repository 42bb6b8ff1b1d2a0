//! # lantern - Request Dispatch Engine
//!
//! `lantern` dispatches HTTP-like requests through an ordered chain of
//! handlers. Filters run first and either pass the request on or end the
//! chain; the first ordinary handler that matches completes the response.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lantern::prelude::*;
//!
//! let launcher = |router: Router, config: &ServerConfig| -> Result<(), BoxError> {
//!     my_listener::serve(router, &config.address())
//! };
//!
//! lantern::http(&ServerConfig::default(), &launcher, |app| {
//!     app.filter("/", |http| http.response.push_str("<!-- served by lantern -->"));
//!     app.path("/notes", |notes| {
//!         notes.get("/new", |http| http.response.push_str("new note"));
//!         notes.on(Verb::Get, "/", Callback::with_params(1, |http| {
//!             let id = http.param(0).unwrap_or_default().to_string();
//!             http.response.push_str(&id);
//!         }));
//!     });
//! })?;
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod config;
pub mod server;

pub use lantern_core::{
    // Handler
    Arity,
    // Error types
    BoxError,
    Callback,
    // Model
    Context,
    DispatchError,
    Exchange,
    // Flow control
    Flow,
    Handler,
    // Builder
    HandlerBuilder,
    HandlerList,
    Headers,
    IntoFlow,
    InvalidArgument,
    Invocation,
    Request,
    RequestBuilder,
    Response,
    // Router
    Router,
    Status,
    StatusError,
    Verb,
};

pub use config::{ConfigError, ServerConfig, load_config};
pub use server::{LaunchError, Launcher, http, http_with_defaults};

/// Standard filter callbacks.
pub mod filters {
    pub use lantern_std::filters::{Guard, LoggingFilter, require_header};
}

/// Transport adapters.
pub mod adapters {
    #![allow(clippy::wildcard_imports)]
    pub use lantern_std::adapters::*;
}

/// Testing utilities.
pub mod testing {
    pub use lantern_std::testing::{RecordingCallback, html_response_for, request_for};
}

/// Prelude module - common imports for Lantern.
///
/// # Usage
///
/// ```rust,ignore
/// use lantern::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Callback, DispatchError, Exchange, Flow, HandlerBuilder, HandlerList, Request,
        Response, Router, ServerConfig, Status, Verb,
    };
}
