//! Guard filter: stop the chain unless a request predicate holds.

use lantern_core::{Callback, Flow, Request, Status};

/// A filter that lets a request through only when `predicate` returns `true`.
///
/// A rejected request ends the chain with the guard's status (403 unless
/// changed) and, if set, its body.
///
/// # Example
///
/// ```rust,ignore
/// let admin_only = Guard::new(|req: &Request| req.context().contains_key("admin"))
///     .status(Status::UNAUTHORIZED)
///     .body("admins only");
/// builder.on(Verb::Any, "/admin", admin_only.into_callback());
/// ```
pub struct Guard<P> {
    predicate: P,
    status: Status,
    body: Option<String>,
}

impl<P> Guard<P>
where
    P: Fn(&Request) -> bool + Send + Sync + 'static,
{
    /// Create a guard around `predicate`.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            status: Status::FORBIDDEN,
            body: None,
        }
    }

    /// Status of the rejection response.
    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Body of the rejection response.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Convert into a variadic filter callback.
    pub fn into_callback(self) -> Callback {
        Callback::variadic(move |http| {
            if (self.predicate)(&*http.request) {
                return Flow::Continue;
            }
            http.response.set_status(self.status);
            if let Some(body) = &self.body {
                http.response.set_body(body.as_str());
            }
            http.disallow()
        })
    }
}

impl<P> From<Guard<P>> for Callback
where
    P: Fn(&Request) -> bool + Send + Sync + 'static,
{
    fn from(guard: Guard<P>) -> Self {
        guard.into_callback()
    }
}

/// A guard that rejects requests missing the header `name`.
pub fn require_header(
    name: &str,
) -> Guard<impl Fn(&Request) -> bool + Send + Sync + 'static + use<>> {
    let name = name.to_string();
    Guard::new(move |request: &Request| request.headers().contains_key(&name))
}
