use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resource identifier -> CloudFormation resource, as compiled upstream.
pub type ResourceStore = Map<String, Value>;

pub const RESOURCES_KEY: &str = "Resources";

/// A compiled CloudFormation template.
///
/// Kept as an untyped object so that everything the reconciler does not
/// touch round-trips unchanged, key order included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template(Map<String, Value>);

impl Template {
    pub fn new(root: Map<String, Value>) -> Self {
        Self(root)
    }

    /// Builds a template holding only a `Resources` section.
    pub fn from_resources(resources: ResourceStore) -> Self {
        let mut root = Map::new();
        root.insert(RESOURCES_KEY.to_string(), Value::Object(resources));
        Self(root)
    }

    pub fn resources(&self) -> Option<&ResourceStore> {
        self.0.get(RESOURCES_KEY).and_then(Value::as_object)
    }

    pub fn resources_mut(&mut self) -> Option<&mut ResourceStore> {
        self.0.get_mut(RESOURCES_KEY).and_then(Value::as_object_mut)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
