use std::collections::HashMap;

use tracing::{debug, info, info_span};

use crate::framework::{DiagnosticSink, LifecycleEvent, Plugin, PluginError};
use crate::model::Service;

/// Runs registered plugins when lifecycle events fire.
///
/// `Lifecycle` is responsible for:
/// - **Registration**: remembering which plugin hooked which event
/// - **Dispatch**: running hooked plugins, in registration order, for an event
///
/// The service is borrowed mutably for the whole dispatch, so plugins never
/// run concurrently with each other or with another mutator.
///
/// # Example
///
/// ```
/// use multiple_responses::framework::{Diagnostic, LifecycleEvent};
/// use multiple_responses::lifecycle::Lifecycle;
/// use multiple_responses::model::Service;
/// use multiple_responses::plugin::{PluginConfig, ResponsesPlugin};
///
/// let mut lifecycle = Lifecycle::new();
/// lifecycle.register(ResponsesPlugin::initialize(PluginConfig::default()));
///
/// let mut service = Service::default();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// lifecycle.run_all(&mut service, &mut diagnostics).unwrap();
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Default)]
pub struct Lifecycle {
    plugins: Vec<Box<dyn Plugin>>,
    /// Event -> indices into `plugins`.
    hooks: HashMap<LifecycleEvent, Vec<usize>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `plugin` for every event it declares in [`Plugin::hooks`].
    pub fn register(&mut self, plugin: impl Plugin + 'static) {
        let index = self.plugins.len();
        for event in plugin.hooks() {
            let hooked = self.hooks.entry(*event).or_default();
            if !hooked.contains(&index) {
                hooked.push(index);
            }
        }
        info!(plugin = plugin.name(), hooks = ?plugin.hooks(), "Registered plugin");
        self.plugins.push(Box::new(plugin));
    }

    /// Names of the plugins hooked on `event`, in dispatch order.
    pub fn hooked(&self, event: LifecycleEvent) -> Vec<&'static str> {
        self.hooks
            .get(&event)
            .into_iter()
            .flatten()
            .map(|&index| self.plugins[index].name())
            .collect()
    }

    /// Runs every plugin hooked on `event`. Stops at the first plugin error.
    pub fn trigger(
        &mut self,
        event: LifecycleEvent,
        service: &mut Service,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), PluginError> {
        let Some(indices) = self.hooks.get(&event) else {
            debug!(%event, "No plugins hooked");
            return Ok(());
        };

        let span = info_span!("lifecycle", %event);
        let _guard = span.enter();
        for &index in indices {
            let plugin = &mut self.plugins[index];
            debug!(plugin = plugin.name(), "Running hook");
            plugin.run(event, service, sink)?;
        }
        Ok(())
    }

    /// Fires every [`LifecycleEvent`] in deployment order.
    pub fn run_all(
        &mut self,
        service: &mut Service,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<(), PluginError> {
        for event in LifecycleEvent::ALL {
            self.trigger(event, service, sink)?;
        }
        Ok(())
    }
}
