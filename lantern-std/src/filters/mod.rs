//! Standard filter callbacks.
//!
//! Each filter converts into a variadic [`Callback`](lantern_core::Callback),
//! ready for [`HandlerBuilder::on`](lantern_core::HandlerBuilder::on) with
//! [`Verb::Any`](lantern_core::Verb::Any).

mod guard;
mod logging;

pub use guard::{Guard, require_header};
pub use logging::LoggingFilter;
