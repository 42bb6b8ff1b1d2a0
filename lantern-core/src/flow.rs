//! Chain control returned by callbacks.

use crate::error::BoxError;

/// Whether a filter lets the chain continue.
///
/// Only filters look at this value. An ordinary handler always ends the chain
/// once it runs, whatever its callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    /// Pass the request on to the next handler without completing the response.
    #[default]
    Continue,
    /// Complete the response here and stop the chain.
    Terminate,
}

/// Trait for converting a callback's output into a [`Flow`].
///
/// # Default Implementations
///
/// - `()` → `Continue`
/// - `Flow` → As is
/// - `Result<T, E>` → Delegates to inner `T` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a handler callback",
    label = "missing `IntoFlow` implementation",
    note = "Callbacks return `()`, a `Flow`, or a `Result` wrapping one of them."
)]
pub trait IntoFlow {
    /// Convert the output into chain control, or a callback failure.
    fn into_flow(self) -> Result<Flow, BoxError>;
}

impl IntoFlow for () {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(Flow::Continue)
    }
}

impl IntoFlow for Flow {
    fn into_flow(self) -> Result<Flow, BoxError> {
        Ok(self)
    }
}

impl<T, E> IntoFlow for Result<T, E>
where
    T: IntoFlow,
    E: Into<BoxError>,
{
    fn into_flow(self) -> Result<Flow, BoxError> {
        match self {
            Ok(t) => t.into_flow(),
            Err(e) => Err(e.into()),
        }
    }
}
