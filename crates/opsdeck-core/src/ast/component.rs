//! Component nodes
//!
//! A component is a typed wrapper around a page element's declared data: a
//! type name (e.g. `display.grid`), a free-form prop bag, and the IAM
//! statements this node itself requires. Prop bags may embed further
//! components at any depth (inside arrays or nested objects); serialization
//! and statement aggregation always walk the full structure.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::types::iam::IamStatement;
use crate::types::PropValue;

/// A declared component node
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    type_name: String,
    props: BTreeMap<String, PropValue>,
    iam_statements: Vec<IamStatement>,
}

/// Serialized `{typeName, props?}` form of a component
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedComponent {
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<JsonValue>,
}

impl Component {
    /// Create a component with an empty prop bag and no statements
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            props: BTreeMap::new(),
            iam_statements: Vec::new(),
        }
    }

    /// Set a prop value
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Set a prop value only when present
    pub fn with_opt_prop(
        self,
        key: impl Into<String>,
        value: Option<impl Into<PropValue>>,
    ) -> Self {
        match value {
            Some(value) => self.with_prop(key, value),
            None => self,
        }
    }

    /// Attach IAM statements this node itself requires
    pub fn with_iam_statements(mut self, statements: Vec<IamStatement>) -> Self {
        self.iam_statements.extend(statements);
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Produce the `{typeName, props?}` serialization.
    ///
    /// The prop bag is deep-copied with every embedded component, however
    /// deeply nested, replaced in place by its own serialized form. When
    /// the bag is empty the `props` key is omitted entirely.
    pub fn serialize_component(&self) -> SerializedComponent {
        let props = if self.props.is_empty() {
            None
        } else {
            Some(JsonValue::Object(
                self.props
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect::<Map<String, JsonValue>>(),
            ))
        };

        SerializedComponent {
            type_name: self.type_name.clone(),
            props,
        }
    }

    /// Collect this node's statements followed by the statements of every
    /// component found anywhere in the prop bag, in depth-first traversal
    /// order. Duplicates are preserved; downstream consumers own dedup.
    pub fn resolve_iam_statements(&self) -> Vec<IamStatement> {
        let mut statements = self.iam_statements.clone();
        for value in self.props.values() {
            collect_statements(value, &mut statements);
        }
        statements
    }
}

fn collect_statements(value: &PropValue, out: &mut Vec<IamStatement>) {
    match value {
        PropValue::Array(items) => {
            for item in items {
                collect_statements(item, out);
            }
        }
        PropValue::Object(map) => {
            for nested in map.values() {
                collect_statements(nested, out);
            }
        }
        PropValue::Component(component) => {
            out.extend(component.resolve_iam_statements());
        }
        _ => {}
    }
}

impl SerializedComponent {
    /// Plain JSON form; `props` is omitted when absent
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        map.insert(
            "typeName".to_string(),
            JsonValue::String(self.type_name.clone()),
        );
        if let Some(props) = &self.props {
            map.insert("props".to_string(), props.clone());
        }
        JsonValue::Object(map)
    }
}
