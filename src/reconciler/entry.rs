//! Helpers over individual integration/method response entries.

use serde_json::{Map, Value};

use crate::model::ResponseConfig;

/// Prefix of every method response header parameter.
pub const HEADER_PREFIX: &str = "method.response.header.";

pub const STATUS_CODE: &str = "StatusCode";
pub const RESPONSE_PARAMETERS: &str = "ResponseParameters";
pub const RESPONSE_TEMPLATES: &str = "ResponseTemplates";

/// Parses a declared status-code key (`"302"`, `" 404 "`).
pub fn parse_status_code(key: &str) -> Option<u16> {
    key.trim().parse().ok()
}

/// Reads `StatusCode` from an entry. Numbers and numeric strings both count.
pub fn status_code(entry: &Value) -> Option<u16> {
    match entry.get(STATUS_CODE)? {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => parse_status_code(s),
        _ => None,
    }
}

/// `Location` -> `method.response.header.Location`.
pub fn header_parameter(name: &str) -> String {
    format!("{HEADER_PREFIX}{name}")
}

/// Drops every entry with `code`, keeping the others in order.
/// Returns whether anything was removed.
pub fn remove_status(list: &mut Vec<Value>, code: u16) -> bool {
    let before = list.len();
    list.retain(|entry| status_code(entry) != Some(code));
    list.len() != before
}

/// Returns the entry for `code`, appending `{ "StatusCode": code }` when
/// there is none. The flag tells whether the entry was created.
pub fn entry_for(list: &mut Vec<Value>, code: u16) -> (&mut Map<String, Value>, bool) {
    let (index, created) = match list.iter().position(|entry| status_code(entry) == Some(code)) {
        Some(index) => (index, false),
        None => {
            let mut entry = Map::new();
            entry.insert(STATUS_CODE.to_string(), Value::from(code));
            list.push(Value::Object(entry));
            (list.len() - 1, true)
        }
    };
    (ensure_object(&mut list[index]), created)
}

/// Writes headers, templates and properties onto an integration response.
pub fn apply_integration(entry: &mut Map<String, Value>, config: &ResponseConfig) {
    let parameters = object_field(entry, RESPONSE_PARAMETERS);
    for (name, source) in &config.headers {
        parameters.insert(header_parameter(name), Value::String(source.clone()));
    }

    let templates = object_field(entry, RESPONSE_TEMPLATES);
    for (content_type, body) in &config.templates {
        templates.insert(content_type.clone(), Value::String(body.clone()));
    }

    for (key, value) in &config.properties {
        entry.insert(key.clone(), value.clone());
    }
}

/// Declares the headers on a method response. The value always references
/// the header parameter of the same name on the method side.
pub fn apply_method(entry: &mut Map<String, Value>, config: &ResponseConfig) {
    let parameters = object_field(entry, RESPONSE_PARAMETERS);
    for (name, source) in &config.headers {
        parameters.insert(header_parameter(name), Value::String(header_parameter(source)));
    }
}

/// Returns `entry[key]` as an object, replacing missing or non-object values.
fn object_field<'a>(entry: &'a mut Map<String, Value>, key: &str) -> &'a mut Map<String, Value> {
    ensure_object(
        entry
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new())),
    )
}

fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => {
            *other = Value::Object(Map::new());
            match other {
                Value::Object(map) => map,
                _ => ensure_object(other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_code_reads_numbers_and_strings() {
        assert_eq!(status_code(&json!({ "StatusCode": 200 })), Some(200));
        assert_eq!(status_code(&json!({ "StatusCode": "404" })), Some(404));
        assert_eq!(status_code(&json!({ "StatusCode": true })), None);
        assert_eq!(status_code(&json!({})), None);
        assert_eq!(status_code(&json!({ "StatusCode": 70000 })), None);
    }

    #[test]
    fn parse_status_code_is_strict() {
        assert_eq!(parse_status_code("302"), Some(302));
        assert_eq!(parse_status_code(" 302 "), Some(302));
        assert_eq!(parse_status_code("2xx"), None);
        assert_eq!(parse_status_code(""), None);
    }

    #[test]
    fn remove_status_keeps_relative_order() {
        let mut list = vec![
            json!({ "StatusCode": 200 }),
            json!({ "StatusCode": 400 }),
            json!({ "StatusCode": 500 }),
        ];
        assert!(remove_status(&mut list, 400));
        assert!(!remove_status(&mut list, 404));
        assert_eq!(list, vec![json!({ "StatusCode": 200 }), json!({ "StatusCode": 500 })]);
    }

    #[test]
    fn entry_for_appends_once() {
        let mut list = vec![json!({ "StatusCode": 200 })];

        let (_, created) = entry_for(&mut list, 302);
        assert!(created);
        let (_, created) = entry_for(&mut list, 302);
        assert!(!created);

        assert_eq!(list.len(), 2);
        assert_eq!(list[1], json!({ "StatusCode": 302 }));
    }

    #[test]
    fn object_field_replaces_non_objects() {
        let mut entry = Map::new();
        entry.insert(RESPONSE_TEMPLATES.into(), Value::Null);
        object_field(&mut entry, RESPONSE_TEMPLATES).insert("a".into(), json!("b"));
        assert_eq!(Value::Object(entry), json!({ "ResponseTemplates": { "a": "b" } }));
    }
}
