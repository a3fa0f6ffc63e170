//! # Plugin Framework Core
//!
//! ## Key Types
//!
//! - [`LifecycleEvent`]: the deployment stages a plugin can hook into.
//! - [`Plugin`]: the fixed method set every plugin exposes.
//! - [`Diagnostic`] / [`DiagnosticSink`]: non-fatal, per-endpoint reports.
//! - [`PluginError`]: failures that do abort a lifecycle event.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Service;
use crate::reconciler::ReconcileError;

// =============================================================================
// 1. LIFECYCLE EVENTS
// =============================================================================

/// A stage of the deployment lifecycle.
///
/// Plugins register against these instead of against free-form hook names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// The template has been compiled but not yet packaged.
    #[serde(rename = "before:package:finalize")]
    BeforePackageFinalize,
    /// Right before the template is handed to CloudFormation.
    #[default]
    #[serde(rename = "before:deploy:deploy")]
    BeforeDeployDeploy,
}

impl LifecycleEvent {
    /// Every event, in the order a deployment fires them.
    pub const ALL: [LifecycleEvent; 2] = [
        LifecycleEvent::BeforePackageFinalize,
        LifecycleEvent::BeforeDeployDeploy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::BeforePackageFinalize => "before:package:finalize",
            LifecycleEvent::BeforeDeployDeploy => "before:deploy:deploy",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleEvent {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| PluginError::UnknownEvent(s.to_string()))
    }
}

// =============================================================================
// 2. ERRORS & DIAGNOSTICS
// =============================================================================

/// Errors that abort a lifecycle event.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PluginError {
    #[error("Unknown lifecycle event: {0}")]
    UnknownEvent(String),
    #[error("{plugin}: {count} response definition(s) could not be applied")]
    Unreconciled { plugin: &'static str, count: usize },
}

/// A non-fatal problem with one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub function: String,
    pub path: String,
    pub error: ReconcileError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {} for {}:{}", self.error, self.function, self.path)
    }
}

/// Where diagnostics go. Reporting never stops the pass.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Emits every diagnostic as a `warn` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(
            function = %diagnostic.function,
            path = %diagnostic.path,
            "{diagnostic}"
        );
    }
}

// =============================================================================
// 3. THE PLUGIN CONTRACT
// =============================================================================

/// A unit of behavior attached to lifecycle events.
///
/// Construction (`initialize(config)`) is left to the implementor; the host
/// only needs the hooks it declared and a way to run them.
pub trait Plugin {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// The events this plugin wants to be run for.
    fn hooks(&self) -> &[LifecycleEvent];

    /// Runs the plugin for `event`, mutating `service` in place.
    fn run(
        &mut self,
        event: LifecycleEvent,
        service: &mut Service,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), PluginError>;
}
