//! Logging filter for request observation.

use lantern_core::{Callback, Flow};

/// A pass-through filter that logs every request it sees.
#[derive(Debug, Clone, Default)]
pub struct LoggingFilter {
    name: Option<String>,
}

impl LoggingFilter {
    /// Create an unnamed logging filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logging filter whose log lines carry `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The filter's name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Convert into a variadic callback that never stops the chain.
    pub fn into_callback(self) -> Callback {
        Callback::variadic(move |http| {
            #[cfg(feature = "tracing")]
            {
                let request = &*http.request;
                let filter = self.name.as_deref().unwrap_or("lantern");
                tracing::info!(filter, %request, "Processing request");
            }
            #[cfg(not(feature = "tracing"))]
            {
                let _ = (&self, http); // Suppress unused warning
            }
            Flow::Continue
        })
    }
}

impl From<LoggingFilter> for Callback {
    fn from(filter: LoggingFilter) -> Self {
        filter.into_callback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::request_for;
    use lantern_core::{Arity, HandlerBuilder, Verb};

    #[test]
    fn test_logging_filter_passes_through() {
        let root = HandlerBuilder::new();
        root.on(Verb::Any, "/", LoggingFilter::named("access").into());
        root.get("/", |http| http.response.push_str("ok"));

        let response = root
            .handlers()
            .to_router()
            .route(&mut request_for("/", None, "GET"))
            .unwrap();
        assert_eq!(response.body(), "ok");
    }

    #[test]
    fn test_callback_is_variadic() {
        let callback = LoggingFilter::new().into_callback();
        assert_eq!(callback.arity(), Arity::Variadic);
    }
}
