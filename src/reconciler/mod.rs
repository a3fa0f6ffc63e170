//! # Response Reconciler
//!
//! Rewrites the two parallel response lists of a generated method resource
//! so they match the declared [`ResponseSpec`]s:
//!
//! - `Properties.Integration.IntegrationResponses` (backend side)
//! - `Properties.MethodResponses` (client-facing side)
//!
//! Both are keyed by `StatusCode`. Status codes that are not mentioned keep
//! their content and position; new entries are appended. Applying the same
//! specs twice yields the same resource as applying them once.
//!
//! The store is mutated in place and there is no rollback: the caller owns
//! it exclusively for the duration of the pass.

pub mod entry;
pub mod error;

pub use entry::{header_parameter, HEADER_PREFIX};
pub use error::*;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::identifier::is_unresolved;
use crate::model::{ResourceStore, ResponseSpec};
use entry::{apply_integration, apply_method, entry_for, parse_status_code, remove_status};

/// What a successful reconciliation did, by status code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReconcileReport {
    /// Status codes that got a new entry in at least one list.
    pub created: Vec<u16>,
    /// Status codes whose existing entries were updated.
    pub updated: Vec<u16>,
    /// Status codes removed from at least one list.
    pub removed: Vec<u16>,
    /// Keys that were ignored, with the reason.
    pub skipped: Vec<ReconcileError>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
            && self.updated.is_empty()
            && self.removed.is_empty()
            && self.skipped.is_empty()
    }
}

/// Applies `responses` to the resource filed under `identifier`.
///
/// # Errors
///
/// - [`ReconcileError::ResourceNotFound`] when the id is unresolved, absent,
///   or names an empty resource.
/// - [`ReconcileError::MalformedResource`] when the resource lacks the
///   expected structure.
///
/// In both cases the store is left untouched. `responses == None` is a valid
/// no-op once the resource has been found.
pub fn reconcile(
    store: &mut ResourceStore,
    identifier: &str,
    responses: Option<&IndexMap<String, ResponseSpec>>,
) -> Result<ReconcileReport, ReconcileError> {
    let resource = lookup(store, identifier)?;

    let mut report = ReconcileReport::default();
    let Some(responses) = responses.filter(|r| !r.is_empty()) else {
        debug!(identifier, "No responses declared");
        return Ok(report);
    };

    check_structure(resource, identifier)?;

    for (key, spec) in responses {
        let Some(code) = parse_status_code(key) else {
            warn!(identifier, key = %key, "Skipping response with invalid status code");
            report
                .skipped
                .push(ReconcileError::MalformedStatusCode { key: key.clone() });
            continue;
        };

        match spec {
            ResponseSpec::Remove => {
                let ResponseLists {
                    integration,
                    method,
                } = response_lists(resource, false);
                let from_integration = integration.is_some_and(|list| remove_status(list, code));
                let from_method = method.is_some_and(|list| remove_status(list, code));
                debug!(identifier, status = code, from_integration, from_method, "Remove");
                if from_integration || from_method {
                    report.removed.push(code);
                }
            }
            ResponseSpec::Configure(config) => {
                let ResponseLists {
                    integration: Some(integration),
                    method: Some(method),
                } = response_lists(resource, true)
                else {
                    return Err(ReconcileError::MalformedResource {
                        identifier: identifier.to_string(),
                        reason: "response lists could not be created",
                    });
                };

                let (integration_entry, integration_created) = entry_for(integration, code);
                apply_integration(integration_entry, config);

                let (method_entry, method_created) = entry_for(method, code);
                apply_method(method_entry, config);

                debug!(
                    identifier,
                    status = code,
                    headers = config.headers.len(),
                    templates = config.templates.len(),
                    properties = config.properties.len(),
                    "Configure"
                );
                if integration_created || method_created {
                    report.created.push(code);
                } else {
                    report.updated.push(code);
                }
            }
        }
    }

    Ok(report)
}

fn lookup<'a>(
    store: &'a mut ResourceStore,
    identifier: &str,
) -> Result<&'a mut Map<String, Value>, ReconcileError> {
    let not_found = || ReconcileError::ResourceNotFound {
        identifier: identifier.to_string(),
    };
    if is_unresolved(identifier) {
        return Err(not_found());
    }
    match store.get_mut(identifier) {
        Some(Value::Object(resource)) if !resource.is_empty() => Ok(resource),
        _ => Err(not_found()),
    }
}

#[derive(Default)]
struct ResponseLists<'a> {
    integration: Option<&'a mut Vec<Value>>,
    method: Option<&'a mut Vec<Value>>,
}

const PROPERTIES: &str = "Properties";
const INTEGRATION: &str = "Integration";
const INTEGRATION_RESPONSES: &str = "IntegrationResponses";
const METHOD_RESPONSES: &str = "MethodResponses";

/// Rejects resources whose response lists cannot be reached. Never mutates.
fn check_structure(resource: &Map<String, Value>, identifier: &str) -> Result<(), ReconcileError> {
    let malformed = |reason| ReconcileError::MalformedResource {
        identifier: identifier.to_string(),
        reason,
    };
    let not_array = |value: Option<&Value>| value.is_some_and(|v| !v.is_array());

    let properties = resource
        .get(PROPERTIES)
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("`Properties` is not an object"))?;
    let integration = properties
        .get(INTEGRATION)
        .and_then(Value::as_object)
        .ok_or_else(|| malformed("`Properties.Integration` is not an object"))?;
    if not_array(integration.get(INTEGRATION_RESPONSES)) {
        return Err(malformed("`IntegrationResponses` is not a list"));
    }
    if not_array(properties.get(METHOD_RESPONSES)) {
        return Err(malformed("`MethodResponses` is not a list"));
    }
    Ok(())
}

/// Borrows both response lists. With `create`, absent lists are inserted
/// empty first; otherwise they come back as `None`.
fn response_lists(resource: &mut Map<String, Value>, create: bool) -> ResponseLists<'_> {
    let Some(properties) = resource.get_mut(PROPERTIES).and_then(Value::as_object_mut) else {
        return ResponseLists::default();
    };
    if create {
        properties
            .entry(METHOD_RESPONSES)
            .or_insert_with(|| Value::Array(Vec::new()));
    }

    let mut lists = ResponseLists::default();
    for (key, value) in properties.iter_mut() {
        match key.as_str() {
            INTEGRATION => {
                let Some(integration) = value.as_object_mut() else {
                    continue;
                };
                let responses = if create {
                    Some(
                        integration
                            .entry(INTEGRATION_RESPONSES)
                            .or_insert_with(|| Value::Array(Vec::new())),
                    )
                } else {
                    integration.get_mut(INTEGRATION_RESPONSES)
                };
                lists.integration = responses.and_then(Value::as_array_mut);
            }
            METHOD_RESPONSES => lists.method = value.as_array_mut(),
            _ => {}
        }
    }
    lists
}
