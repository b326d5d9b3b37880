//! Dynamic values for component property bags
//!
//! `PropValue` represents the free-form, JSON-like data stored in component
//! props. Unlike plain JSON it can embed [`Component`] nodes at any depth;
//! rendering to `serde_json::Value` replaces every embedded component with
//! its serialized form.
//!
//! `BTreeMap` keeps object traversal deterministic, so repeated builds of
//! the same tree serialize identically and aggregate IAM statements in the
//! same order.

use std::collections::BTreeMap;

use serde_json::{Number, Value as JsonValue};

use crate::ast::component::Component;

/// Dynamic prop value
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Number value; integers stay integers on the wire
    Number(Number),
    /// String value
    String(String),
    /// Array of values
    Array(Vec<PropValue>),
    /// Object (key-value map)
    Object(BTreeMap<String, PropValue>),
    /// Embedded component node
    Component(Component),
}

impl PropValue {
    /// Render as plain JSON, replacing every embedded component (at any
    /// nesting depth) with its `{typeName, props?}` serialization.
    pub fn to_json(&self) -> JsonValue {
        match self {
            PropValue::Null => JsonValue::Null,
            PropValue::Bool(b) => JsonValue::Bool(*b),
            PropValue::Number(n) => JsonValue::Number(n.clone()),
            PropValue::String(s) => JsonValue::String(s.clone()),
            PropValue::Array(items) => {
                JsonValue::Array(items.iter().map(PropValue::to_json).collect())
            }
            PropValue::Object(map) => JsonValue::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            PropValue::Component(component) => component.serialize_component().to_json(),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    /// Non-finite values convert to `Null`, matching serde_json
    fn from(value: f64) -> Self {
        Number::from_f64(value)
            .map(PropValue::Number)
            .unwrap_or(PropValue::Null)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Number(Number::from(value))
    }
}

impl From<u32> for PropValue {
    fn from(value: u32) -> Self {
        PropValue::Number(Number::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<Component> for PropValue {
    fn from(value: Component) -> Self {
        PropValue::Component(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        PropValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, PropValue>> for PropValue {
    fn from(map: BTreeMap<String, PropValue>) -> Self {
        PropValue::Object(map)
    }
}

impl From<JsonValue> for PropValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PropValue::Null,
            JsonValue::Bool(b) => PropValue::Bool(b),
            JsonValue::Number(n) => PropValue::Number(n),
            JsonValue::String(s) => PropValue::String(s),
            JsonValue::Array(items) => {
                PropValue::Array(items.into_iter().map(PropValue::from).collect())
            }
            JsonValue::Object(map) => PropValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, PropValue::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(PropValue::from(true), PropValue::Bool(true));
        assert_eq!(PropValue::from(42i64), PropValue::Number(Number::from(42)));
        assert_eq!(
            PropValue::from("hello"),
            PropValue::String("hello".to_string())
        );
    }

    #[test]
    fn test_integers_stay_integers_on_the_wire() {
        assert_eq!(PropValue::from(2u32).to_json(), json!(2));
        assert_eq!(PropValue::from(2i64).to_json(), json!(2));
        assert_ne!(PropValue::from(2i64).to_json(), json!(2.0));
        assert_eq!(PropValue::from(2.5f64).to_json(), json!(2.5));
    }

    #[test]
    fn test_json_round_trip() {
        let json = json!({
            "label": "Save",
            "disabled": false,
            "columns": [1, 2, 3],
            "nested": { "deep": null }
        });

        let value = PropValue::from(json.clone());
        assert_eq!(value.to_json(), json);
    }

    #[test]
    fn test_non_finite_number_converts_to_null() {
        assert_eq!(PropValue::from(f64::NAN), PropValue::Null);
        assert_eq!(PropValue::from(f64::INFINITY), PropValue::Null);
    }

    #[test]
    fn test_to_json_is_repeatable() {
        let value = PropValue::from(json!({ "a": [1, { "b": "c" }] }));
        assert_eq!(value.to_json(), value.to_json());
    }
}
