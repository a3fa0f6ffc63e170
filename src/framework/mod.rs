//! Plugin framework: lifecycle events, the plugin contract and diagnostics.
//!
//! # Main Components
//!
//! - [`Plugin`] - The fixed method set a plugin exposes to the host
//! - [`LifecycleEvent`] - Enum-keyed hooks instead of free-form hook names
//! - [`DiagnosticSink`] - Where per-endpoint, non-fatal problems are reported
//! - [`PluginError`] - Failures that abort a lifecycle event
//!
//! # Testing
//!
//! See [`mock`] module for a mock [`EventAmender`](crate::selector::EventAmender).

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
