//! Tower integration.
//!
//! [`RouterService`] exposes a [`Router`] as a `tower::Service` over `http`
//! types. Dispatch is synchronous, so every call resolves with a ready future.
//!
//! ```rust,ignore
//! let service = RouterService::new(list.to_router());
//! let response = service.oneshot(http_request).await?;
//! ```

use super::http::{from_http, into_http};
use futures::future::{Ready, ready};
use lantern_core::{Response, Router, Status};
use std::{
    convert::Infallible,
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;

/// A `tower::Service` that answers `http` requests with a [`Router`].
///
/// Never fails: unroutable or unconvertible requests become error pages.
#[derive(Debug, Clone)]
pub struct RouterService {
    router: Arc<Router>,
}

impl RouterService {
    /// Wrap `router`.
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    /// The wrapped router.
    pub fn router(&self) -> &Router {
        &self.router
    }

    fn answer<B: AsRef<[u8]>>(&self, request: ::http::Request<B>) -> ::http::Response<String> {
        let response = match from_http(request) {
            Ok(mut request) => self.router.respond(&mut request),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %err, "Rejected request");
                Response::error_page(Status::BAD_REQUEST, &err.to_string())
            }
        };

        into_http(response).unwrap_or_else(|err| {
            #[cfg(feature = "tracing")]
            tracing::error!(error = %err, "Response conversion failed");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
            let mut fallback = ::http::Response::new(String::new());
            *fallback.status_mut() = ::http::StatusCode::SERVICE_UNAVAILABLE;
            fallback
        })
    }
}

impl<B> Service<::http::Request<B>> for RouterService
where
    B: AsRef<[u8]>,
{
    type Response = ::http::Response<String>;
    type Error = Infallible;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Routers are always ready
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: ::http::Request<B>) -> Self::Future {
        ready(Ok(self.answer(request)))
    }
}
