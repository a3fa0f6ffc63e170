//! Orchestration of a deployment pass.
//!
//! # Main Components
//!
//! - [`Lifecycle`] - Registers plugins against lifecycle events and dispatches them
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod host;
pub mod tracing;

pub use host::*;
pub use tracing::*;
