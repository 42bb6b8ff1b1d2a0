//! Launch seam between a configured router and a network listener.
//!
//! Lantern does not run a listener loop. [`http`] builds the handler list,
//! freezes it into a [`Router`] and hands that to a [`Launcher`] together with
//! the bind address.

use crate::config::{ConfigError, ServerConfig};
use lantern_core::{BoxError, HandlerBuilder, HandlerList, Router};
use thiserror::Error;

/// Starts serving a router.
pub trait Launcher {
    /// Serve `router` on the address in `config`.
    fn launch(&self, router: Router, config: &ServerConfig) -> Result<(), BoxError>;
}

impl<F> Launcher for F
where
    F: Fn(Router, &ServerConfig) -> Result<(), BoxError>,
{
    fn launch(&self, router: Router, config: &ServerConfig) -> Result<(), BoxError> {
        self(router, config)
    }
}

/// Errors from [`http`].
#[derive(Error, Debug)]
pub enum LaunchError {
    /// The configuration was rejected before launching.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The launcher failed.
    #[error("launch failed: {0}")]
    Launch(#[source] BoxError),
}

/// Register handlers with `configure`, then launch the resulting router.
///
/// Returns the registered list once the launcher returns.
pub fn http<L, F>(config: &ServerConfig, launcher: &L, configure: F) -> Result<HandlerList, LaunchError>
where
    L: Launcher + ?Sized,
    F: FnOnce(&HandlerBuilder),
{
    config.validate()?;

    let builder = HandlerBuilder::new();
    configure(&builder);
    let handlers = builder.handlers().clone();
    let router = handlers.to_router();

    #[cfg(feature = "tracing")]
    tracing::info!(
        address = %config.address(),
        handlers = router.len(),
        "Launching router"
    );

    launcher
        .launch(router, config)
        .map_err(LaunchError::Launch)?;
    Ok(handlers)
}

/// [`http`] with the default [`ServerConfig`].
pub fn http_with_defaults<L, F>(launcher: &L, configure: F) -> Result<HandlerList, LaunchError>
where
    L: Launcher + ?Sized,
    F: FnOnce(&HandlerBuilder),
{
    http(&ServerConfig::default(), launcher, configure)
}
