use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::response::ResponseSpec;
use super::template::Template;

/// The unit a deployment pass operates on: declared functions plus the
/// template the upstream generator compiled for them.
#[derive(Debug, Clone, Default)]
pub struct Service {
    pub functions: IndexMap<String, FunctionDef>,
    pub template: Template,
}

impl Service {
    pub fn new(functions: IndexMap<String, FunctionDef>, template: Template) -> Self {
        Self { functions, template }
    }
}

/// Deserializable view of a service description. Only `functions` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceDefinition {
    #[serde(default)]
    pub functions: IndexMap<String, FunctionDef>,
}

/// A declared function and the events that trigger it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FunctionDef {
    #[serde(default)]
    pub events: Vec<FunctionEvent>,
    /// Handler, memory size, timeout, ... (not interpreted here).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One trigger of a function. Only the `http` trait is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FunctionEvent {
    #[serde(default)]
    pub http: Option<HttpEvent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FunctionEvent {
    pub fn http(http: HttpEvent) -> Self {
        Self {
            http: Some(http),
            extra: Map::new(),
        }
    }
}

/// The HTTP trait of an event.
///
/// Accepts both the object form and the `"METHOD path"` shorthand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpEvent {
    pub path: String,
    pub method: String,
    /// Status code (as written) -> desired behavior.
    pub responses: Option<IndexMap<String, ResponseSpec>>,
}

impl HttpEvent {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            responses: None,
        }
    }

    pub fn with_response(mut self, status: impl Into<String>, spec: impl Into<ResponseSpec>) -> Self {
        self.responses
            .get_or_insert_with(IndexMap::new)
            .insert(status.into(), spec.into());
        self
    }
}

impl<'de> Deserialize<'de> for HttpEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HttpEventVisitor)
    }
}

#[derive(Deserialize)]
struct DetailedHttpEvent {
    #[serde(default)]
    path: String,
    #[serde(default)]
    method: String,
    #[serde(default)]
    responses: Option<IndexMap<String, ResponseSpec>>,
}

struct HttpEventVisitor;

impl<'de> Visitor<'de> for HttpEventVisitor {
    type Value = HttpEvent;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an http event object or a \"METHOD path\" string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let mut parts = v.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(path), None) => Ok(HttpEvent::new(method, path)),
            _ => Err(E::custom(format!(
                "invalid http shorthand \"{v}\", expected \"METHOD path\""
            ))),
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        let DetailedHttpEvent {
            path,
            method,
            responses,
        } = DetailedHttpEvent::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(HttpEvent {
            path,
            method,
            responses,
        })
    }
}
