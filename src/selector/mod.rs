//! # Endpoint Selector
//!
//! Walks declared functions and yields every event that carries an HTTP
//! trait. Events without one are skipped; nothing else is interpreted.

use indexmap::IndexMap;

use crate::model::{FunctionDef, HttpEvent};

/// Receives each `(function name, function, http trait)` triple.
pub trait EventAmender {
    fn amend_event(&mut self, function_name: &str, function: &FunctionDef, http: &HttpEvent);
}

/// Calls `callback` for every HTTP event, in declaration order.
pub fn for_each_http_event<F>(functions: &IndexMap<String, FunctionDef>, mut callback: F)
where
    F: FnMut(&str, &FunctionDef, &HttpEvent),
{
    for (name, function) in functions {
        for http in function.events.iter().filter_map(|event| event.http.as_ref()) {
            callback(name, function, http);
        }
    }
}

/// Hands every HTTP event to `amender`.
pub fn amend_resources<A>(functions: &IndexMap<String, FunctionDef>, amender: &mut A)
where
    A: EventAmender + ?Sized,
{
    for_each_http_event(functions, |name, function, http| {
        amender.amend_event(name, function, http)
    });
}
