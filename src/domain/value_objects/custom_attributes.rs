//! User-supplied custom attributes attached to every deployment marker

use std::str::FromStr;

use serde_json::{Map, Value};

/// Error parsing custom attributes
#[derive(Debug, thiserror::Error)]
pub enum CustomAttributesError {
    #[error("custom attributes are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("custom attributes must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

/// A JSON object of extra attributes for deployment markers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomAttributes(Map<String, Value>);

impl CustomAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object string such as `{"team":"mobile"}`.
    pub fn parse(raw: &str) -> Result<Self, CustomAttributesError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CustomAttributesError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl FromStr for CustomAttributes {
    type Err = CustomAttributesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Map<String, Value>> for CustomAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
