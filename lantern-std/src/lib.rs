//! # lantern-std
//!
//! Standard implementations for the Lantern request router.
//!
//! This crate provides:
//! - **Filters**: [`LoggingFilter`](filters::LoggingFilter), [`Guard`](filters::Guard)
//! - **Adapters**: lenient text parsing, `http` conversion (feature `http`),
//!   and a `tower` service (feature `tower`)
//! - **Testing**: request fixtures and a recording callback

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core
pub use lantern_core;

// Modules
pub mod adapters;
pub mod filters;
pub mod testing;
