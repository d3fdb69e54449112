//! Light records as served by the light server.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Path segment appended to the endpoint to address the light collection.
pub const LIGHTS_PATH: &str = "/light";

/// Stable identity of a light.
///
/// The server is free to use numeric or string identifiers, so both are
/// accepted and kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LightId {
    Number(Number),
    Text(String),
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightId::Number(n) => write!(f, "{}", n),
            LightId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for LightId {
    fn from(value: i64) -> Self {
        LightId::Number(Number::from(value))
    }
}

impl From<&str> for LightId {
    fn from(value: &str) -> Self {
        LightId::Text(value.to_string())
    }
}

/// A controllable light fixture.
///
/// Only `id` has a fixed meaning. Every other field the server sends is kept
/// verbatim in `attributes` for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub id: LightId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Light {
    pub fn new(id: impl Into<LightId>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    /// The `name` attribute, if it is a non-empty string.
    pub fn name(&self) -> Option<&str> {
        self.attributes
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Scalar attribute rendered as text. Strings are unquoted.
    pub fn attribute_text(&self, key: &str) -> Option<String> {
        match self.attributes.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Base address of the light server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(base: impl Into<String>) -> Self {
        Self(base.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `{endpoint}/light`. A single trailing slash on the base is dropped.
    pub fn lights_url(&self) -> String {
        format!("{}{}", self.base(), LIGHTS_PATH)
    }

    /// `{endpoint}/light/{id}`
    pub fn light_url(&self, id: &LightId) -> String {
        format!("{}{}/{}", self.base(), LIGHTS_PATH, id)
    }

    fn base(&self) -> &str {
        self.0.strip_suffix('/').unwrap_or(&self.0)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
