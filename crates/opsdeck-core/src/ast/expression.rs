//! Runtime conditional expressions
//!
//! `Expr<T>` is the build-time representation of an `if` over values of
//! type `T`. Branches may be plain values or further if-nodes, so the type
//! nests through arbitrarily many levels. The statement is evaluated by the
//! app runtime against live state; at build time the tree is only composed,
//! resolved and serialized.
//!
//! Wire shape of an if-node (fixed, consumed by the app runtime):
//! `{"runtimeExpression":{"typeName":"if","statement":S,"positive":P,"negative":N}}`

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::operator::Statement;
use crate::types::PropValue;

/// A value of type `T` or a runtime if-expression over it
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T> {
    /// Plain value
    Value(T),
    /// Runtime if-node
    If(Box<IfExpr<T>>),
}

/// Runtime `if` node: a statement plus positive and negative branches
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr<T> {
    pub statement: Statement,
    pub positive: Expr<T>,
    pub negative: Expr<T>,
}

impl<T> Expr<T> {
    /// Build an if-node from a statement and two branches
    pub fn when(
        statement: Statement,
        positive: impl Into<Expr<T>>,
        negative: impl Into<Expr<T>>,
    ) -> Self {
        Expr::If(Box::new(IfExpr {
            statement,
            positive: positive.into(),
            negative: negative.into(),
        }))
    }

    /// Returns true when this is an if-node rather than a plain value
    pub fn is_if(&self) -> bool {
        matches!(self, Expr::If(_))
    }

    /// Map every plain value in the tree, keeping statements and branch
    /// structure intact
    pub fn map<U>(self, f: &mut impl FnMut(T) -> U) -> Expr<U> {
        match self {
            Expr::Value(value) => Expr::Value(f(value)),
            Expr::If(node) => {
                let IfExpr {
                    statement,
                    positive,
                    negative,
                } = *node;
                Expr::If(Box::new(IfExpr {
                    statement,
                    positive: positive.map(f),
                    negative: negative.map(f),
                }))
            }
        }
    }
}

impl<T: Into<PropValue>> Expr<T> {
    /// Convert into a prop value, preserving the serialized wire shape of
    /// if-nodes
    pub fn into_prop(self) -> PropValue {
        match self {
            Expr::Value(value) => value.into(),
            Expr::If(node) => {
                let IfExpr {
                    statement,
                    positive,
                    negative,
                } = *node;

                let mut body = BTreeMap::new();
                body.insert("typeName".to_string(), PropValue::from("if"));
                body.insert("statement".to_string(), statement.to_prop());
                body.insert("positive".to_string(), positive.into_prop());
                body.insert("negative".to_string(), negative.into_prop());

                let mut wrapper = BTreeMap::new();
                wrapper.insert("runtimeExpression".to_string(), PropValue::Object(body));
                PropValue::Object(wrapper)
            }
        }
    }
}

impl<T> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Expr::Value(value)
    }
}

impl From<&str> for Expr<String> {
    fn from(value: &str) -> Self {
        Expr::Value(value.to_string())
    }
}

impl<T: Into<PropValue>> From<Expr<T>> for PropValue {
    fn from(expr: Expr<T>) -> Self {
        expr.into_prop()
    }
}

impl<T: Serialize> Serialize for Expr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expr::Value(value) => value.serialize(serializer),
            Expr::If(node) => node.serialize(serializer),
        }
    }
}

impl<T: Serialize> Serialize for IfExpr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a, T: Serialize> {
            type_name: &'static str,
            statement: &'a Statement,
            positive: &'a Expr<T>,
            negative: &'a Expr<T>,
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            "runtimeExpression",
            &Body {
                type_name: "if",
                statement: &self.statement,
                positive: &self.positive,
                negative: &self.negative,
            },
        )?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_value_lifts() {
        let expr: Expr<String> = "Create".into();
        assert_eq!(expr, Expr::Value("Create".to_string()));
        assert!(!expr.is_if());
    }

    #[test]
    fn test_when_builds_if_node() {
        let expr: Expr<String> = Expr::when(Statement::eq("{{op}}", "create"), "Create", "Save");

        match &expr {
            Expr::If(node) => {
                assert_eq!(node.statement, Statement::eq("{{op}}", "create"));
                assert_eq!(node.positive, Expr::Value("Create".to_string()));
                assert_eq!(node.negative, Expr::Value("Save".to_string()));
            }
            other => panic!("Expected if-node, got {other:?}"),
        }
        assert!(expr.is_if());
    }

    #[test]
    fn test_nested_if_type_checks() {
        let expr: Expr<String> = Expr::when(
            Statement::eq("{{op}}", "create"),
            "Create",
            Expr::when(Statement::eq("{{op}}", "delete"), "Delete", "Select..."),
        );

        match expr {
            Expr::If(node) => assert!(node.negative.is_if()),
            other => panic!("Expected if-node, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_wire_shape() {
        let expr: Expr<String> =
            Expr::when(Statement::gt("{{count}}", "3"), "many", "few");

        let json = serde_json::to_value(&expr).unwrap();
        assert_eq!(
            json,
            json!({
                "runtimeExpression": {
                    "typeName": "if",
                    "statement": { "gt": ["{{count}}", "3"] },
                    "positive": "many",
                    "negative": "few"
                }
            })
        );
    }

    #[test]
    fn test_into_prop_matches_serde_shape() {
        let expr: Expr<String> = Expr::when(
            Statement::eq("{{a}}", "b"),
            "yes",
            Expr::when(Statement::lt("{{n}}", "2"), "low", "high"),
        );

        assert_eq!(
            expr.clone().into_prop().to_json(),
            serde_json::to_value(&expr).unwrap()
        );
    }

    #[test]
    fn test_map_preserves_structure() {
        let expr: Expr<String> = Expr::when(Statement::eq("{{a}}", "b"), "1", "2");
        let mapped = expr.map(&mut |s| s.len());

        match mapped {
            Expr::If(node) => {
                assert_eq!(node.statement, Statement::eq("{{a}}", "b"));
                assert_eq!(node.positive, Expr::Value(1));
                assert_eq!(node.negative, Expr::Value(1));
            }
            other => panic!("Expected if-node, got {other:?}"),
        }
    }
}
