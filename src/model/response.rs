use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Keyword that removes a status code from both response lists.
pub const REMOVE_KEYWORD: &str = "remove";

/// Desired behavior for one status code of an HTTP endpoint.
///
/// Deserializes from the string `"remove"` (or the boolean `false`) into
/// [`ResponseSpec::Remove`], and from an object into
/// [`ResponseSpec::Configure`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSpec {
    /// Drop the entry for this status code from both lists.
    Remove,
    /// Create or update the entry for this status code.
    Configure(ResponseConfig),
}

/// Headers, body templates and extra integration properties for a status code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseConfig {
    /// Header name -> source expression (or quoted literal). Numbers and
    /// booleans are accepted and kept as their JSON text (`600` -> `"600"`).
    #[serde(default, deserialize_with = "scalar_strings")]
    pub headers: IndexMap<String, String>,
    /// Content type -> response mapping template.
    #[serde(default)]
    pub templates: IndexMap<String, String>,
    /// Merged verbatim onto the integration response entry.
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl ResponseConfig {
    pub fn header(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
        self.headers.insert(name.into(), source.into());
        self
    }

    pub fn template(mut self, content_type: impl Into<String>, body: impl Into<String>) -> Self {
        self.templates.insert(content_type.into(), body.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }
}

impl From<ResponseConfig> for ResponseSpec {
    fn from(config: ResponseConfig) -> Self {
        ResponseSpec::Configure(config)
    }
}

impl<'de> Deserialize<'de> for ResponseSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ResponseSpecVisitor)
    }
}

struct ResponseSpecVisitor;

impl<'de> Visitor<'de> for ResponseSpecVisitor {
    type Value = ResponseSpec;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{REMOVE_KEYWORD}\", `false` or a response object")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        if v {
            return Err(E::custom(format!(
                "expected \"{REMOVE_KEYWORD}\" or a response object, found `true`"
            )));
        }
        Ok(ResponseSpec::Remove)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v != REMOVE_KEYWORD {
            return Err(E::custom(format!(
                "expected \"{REMOVE_KEYWORD}\" or a response object, found \"{v}\""
            )));
        }
        Ok(ResponseSpec::Remove)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        ResponseConfig::deserialize(de::value::MapAccessDeserializer::new(map))
            .map(ResponseSpec::Configure)
    }
}

fn scalar_strings<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<IndexMap<String, String>, D::Error> {
    let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, value)| match value {
            Value::String(s) => Ok((name, s)),
            Value::Number(_) | Value::Bool(_) => Ok((name, value.to_string())),
            other => Err(de::Error::custom(format!(
                "header {name}: expected a string, number or boolean, found {other}"
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remove_accepts_keyword_and_false() {
        let keyword: ResponseSpec = serde_json::from_value(json!("remove")).unwrap();
        let flag: ResponseSpec = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(keyword, ResponseSpec::Remove);
        assert_eq!(flag, ResponseSpec::Remove);
    }

    #[test]
    fn rejects_other_scalars() {
        let err = serde_json::from_value::<ResponseSpec>(json!("delete")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected \"remove\" or a response object, found \"delete\""
        );
        assert!(serde_json::from_value::<ResponseSpec>(json!(true)).is_err());
        assert!(serde_json::from_value::<ResponseSpec>(json!(404)).is_err());
    }

    #[test]
    fn scalar_header_values_become_strings() {
        let spec: ResponseSpec = serde_json::from_value(json!({
            "headers": {
                "Access-Control-Max-Age": 600,
                "X-Cacheable": false,
                "Pragma": "'no-cache'"
            }
        }))
        .unwrap();

        let ResponseSpec::Configure(config) = spec else {
            panic!("expected Configure");
        };
        assert_eq!(config.headers["Access-Control-Max-Age"], "600");
        assert_eq!(config.headers["X-Cacheable"], "false");
        assert_eq!(config.headers["Pragma"], "'no-cache'");
    }

    #[test]
    fn structured_header_values_are_rejected() {
        let err = serde_json::from_value::<ResponseSpec>(json!({
            "headers": { "Location": { "from": "body" } }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("header Location"), "{err}");
    }

    #[test]
    fn configure_keeps_declaration_order() {
        let spec: ResponseSpec = serde_json::from_value(json!({
            "headers": { "Pragma": "'no-cache'", "Location": "integration.response.body.url" },
            "properties": { "SelectionPattern": ".*\\[302\\].*" }
        }))
        .unwrap();

        let ResponseSpec::Configure(config) = spec else {
            panic!("expected Configure");
        };
        let names: Vec<_> = config.headers.keys().map(String::as_str).collect();
        assert_eq!(names, ["Pragma", "Location"]);
        assert!(config.templates.is_empty());
        assert_eq!(config.properties["SelectionPattern"], json!(".*\\[302\\].*"));
    }
}
