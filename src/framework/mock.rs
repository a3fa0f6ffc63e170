//! # Mock Framework
//!
//! Utilities for testing event dispatch without touching a template.
//!
//! [`MockAmender`] records expected `amend_event` calls in order and panics
//! on the first call that does not match.
//!
//! ```
//! use indexmap::IndexMap;
//! use multiple_responses::framework::mock::MockAmender;
//! use multiple_responses::model::{FunctionDef, FunctionEvent, HttpEvent};
//! use multiple_responses::selector::amend_resources;
//!
//! let ping = FunctionDef {
//!     events: vec![FunctionEvent::http(HttpEvent::new("GET", "ping"))],
//!     ..Default::default()
//! };
//! let functions = IndexMap::from([("ping".to_string(), ping)]);
//!
//! let mut mock = MockAmender::new();
//! mock.expect_event("ping").with_path("ping");
//! amend_resources(&functions, &mut mock);
//! mock.verify();
//! ```

use std::collections::VecDeque;

use crate::model::{FunctionDef, HttpEvent};
use crate::selector::EventAmender;

/// An expected `amend_event` call.
#[derive(Debug, Clone, PartialEq)]
struct Expectation {
    function_name: String,
    path: Option<String>,
    method: Option<String>,
}

/// An [`EventAmender`] that checks calls against queued expectations.
#[derive(Debug, Default)]
pub struct MockAmender {
    expectations: VecDeque<Expectation>,
    calls: Vec<(String, HttpEvent)>,
}

impl MockAmender {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next call to be for `function_name`.
    pub fn expect_event(&mut self, function_name: impl Into<String>) -> ExpectationBuilder<'_> {
        self.expectations.push_back(Expectation {
            function_name: function_name.into(),
            path: None,
            method: None,
        });
        ExpectationBuilder { mock: self }
    }

    /// Every call received so far.
    pub fn calls(&self) -> &[(String, HttpEvent)] {
        &self.calls
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        if !self.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                self.expectations.len()
            );
        }
    }
}

impl EventAmender for MockAmender {
    fn amend_event(&mut self, function_name: &str, _function: &FunctionDef, http: &HttpEvent) {
        self.calls.push((function_name.to_string(), http.clone()));

        let Some(expected) = self.expectations.pop_front() else {
            panic!("Unexpected amend_event call for {function_name}:{}", http.path);
        };
        assert_eq!(expected.function_name, function_name, "function name mismatch");
        if let Some(path) = &expected.path {
            assert_eq!(path, &http.path, "path mismatch for {function_name}");
        }
        if let Some(method) = &expected.method {
            assert_eq!(method, &http.method, "method mismatch for {function_name}");
        }
    }
}

/// Refines the most recently queued expectation.
pub struct ExpectationBuilder<'a> {
    mock: &'a mut MockAmender,
}

impl ExpectationBuilder<'_> {
    pub fn with_path(self, path: impl Into<String>) -> Self {
        if let Some(last) = self.mock.expectations.back_mut() {
            last.path = Some(path.into());
        }
        self
    }

    pub fn with_method(self, method: impl Into<String>) -> Self {
        if let Some(last) = self.mock.expectations.back_mut() {
            last.method = Some(method.into());
        }
        self
    }
}
