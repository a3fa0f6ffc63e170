//! The responses plugin: applies per-route response specs to the compiled
//! template right before deployment.
//!
//! For every HTTP event the [`selector`](crate::selector) yields, the method
//! resource id is derived with [`derive_identifier`] and the declared
//! responses are applied with [`reconcile`]. Endpoints that fail are reported
//! to the [`DiagnosticSink`] and the pass moves on.

pub mod config;

pub use config::*;

use tracing::{debug, info, info_span};

use crate::framework::{Diagnostic, DiagnosticSink, LifecycleEvent, Plugin, PluginError};
use crate::identifier::derive_identifier;
use crate::model::{FunctionDef, HttpEvent, ResourceStore, Service};
use crate::reconciler::{reconcile, ReconcileError};
use crate::selector::{self, EventAmender};

pub const PLUGIN_NAME: &str = "multiple-responses";

/// Counters for one pass over a service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// HTTP events visited.
    pub endpoints: usize,
    /// Endpoints whose resource was found and reconciled.
    pub reconciled: usize,
    /// Diagnostics reported (missing resources, invalid keys, ...).
    pub diagnostics: usize,
}

/// Rewrites method and integration responses from declared response specs.
#[derive(Debug, Clone, Default)]
pub struct ResponsesPlugin {
    config: PluginConfig,
}

impl ResponsesPlugin {
    pub fn initialize(config: PluginConfig) -> Self {
        debug!(?config, "Initializing {PLUGIN_NAME}");
        Self { config }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Runs one full pass over `service`, regardless of lifecycle event.
    ///
    /// The template is mutated in place; a pass interrupted midway leaves
    /// the endpoints already visited amended.
    pub fn amend_resources(
        &self,
        service: &mut Service,
        sink: &mut dyn DiagnosticSink,
    ) -> RunSummary {
        let Service {
            functions,
            template,
        } = service;

        let mut amender = ResponseAmender {
            store: template.resources_mut(),
            sink,
            summary: RunSummary::default(),
        };
        selector::amend_resources(functions, &mut amender);
        amender.summary
    }
}

impl Plugin for ResponsesPlugin {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn hooks(&self) -> &[LifecycleEvent] {
        std::slice::from_ref(&self.config.hook)
    }

    fn run(
        &mut self,
        event: LifecycleEvent,
        service: &mut Service,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), PluginError> {
        if event != self.config.hook {
            debug!(%event, hook = %self.config.hook, "Not hooked on this event");
            return Ok(());
        }

        let summary = self.amend_resources(service, sink);
        info!(
            %event,
            endpoints = summary.endpoints,
            reconciled = summary.reconciled,
            diagnostics = summary.diagnostics,
            "Amended resources"
        );

        if self.config.strict && summary.diagnostics > 0 {
            return Err(PluginError::Unreconciled {
                plugin: PLUGIN_NAME,
                count: summary.diagnostics,
            });
        }
        Ok(())
    }
}

/// Per-pass state handed to the selector.
struct ResponseAmender<'a> {
    store: Option<&'a mut ResourceStore>,
    sink: &'a mut dyn DiagnosticSink,
    summary: RunSummary,
}

impl ResponseAmender<'_> {
    fn report(&mut self, function_name: &str, http: &HttpEvent, error: ReconcileError) {
        self.summary.diagnostics += 1;
        self.sink.report(Diagnostic {
            function: function_name.to_string(),
            path: http.path.clone(),
            error,
        });
    }
}

impl EventAmender for ResponseAmender<'_> {
    fn amend_event(&mut self, function_name: &str, _function: &FunctionDef, http: &HttpEvent) {
        self.summary.endpoints += 1;

        let identifier = derive_identifier(&http.path, &http.method);
        let _span = info_span!("amend_event", function = function_name, path = %http.path).entered();

        let result = match self.store.as_deref_mut() {
            Some(store) => reconcile(store, &identifier, http.responses.as_ref()),
            None => Err(ReconcileError::ResourceNotFound {
                identifier: identifier.clone(),
            }),
        };

        match result {
            Ok(report) => {
                self.summary.reconciled += 1;
                if report.is_empty() {
                    debug!(%identifier, "Nothing to change");
                } else {
                    info!(
                        %identifier,
                        created = ?report.created,
                        updated = ?report.updated,
                        removed = ?report.removed,
                        "Reconciled"
                    );
                }
                for error in report.skipped {
                    self.report(function_name, http, error);
                }
            }
            Err(error) => self.report(function_name, http, error),
        }
    }
}
