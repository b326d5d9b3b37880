//! Comparison and logical operators for runtime conditional expressions
//!
//! Operators are plain immutable data. They are never evaluated at build
//! time; the app runtime evaluates them against live state. Wire shape is
//! externally tagged: `{"eq":["left","right"]}`, `{"and":[...]}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::PropValue;

/// Comparison operator over two string operands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    /// Equal (==)
    Eq(String, String),
    /// Greater than (>)
    Gt(String, String),
    /// Less than (<)
    Lt(String, String),
    /// Greater than or equal (>=)
    Gte(String, String),
    /// Less than or equal (<=)
    Lte(String, String),
}

/// Boolean combination of statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Logical {
    /// Logical AND over N operands
    And(Vec<Statement>),
    /// Logical OR over N operands
    Or(Vec<Statement>),
    /// Logical NOT over a single operand
    Not(Box<Statement>),
}

/// A statement is either a comparison or a boolean combination of further
/// statements (recursive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Statement {
    Comparison(Comparison),
    Logical(Logical),
}

impl Statement {
    /// Equality operator `==`
    pub fn eq(left: impl Into<String>, right: impl Into<String>) -> Self {
        Statement::Comparison(Comparison::Eq(left.into(), right.into()))
    }

    /// Greater than operator `>`
    pub fn gt(left: impl Into<String>, right: impl Into<String>) -> Self {
        Statement::Comparison(Comparison::Gt(left.into(), right.into()))
    }

    /// Less than operator `<`
    pub fn lt(left: impl Into<String>, right: impl Into<String>) -> Self {
        Statement::Comparison(Comparison::Lt(left.into(), right.into()))
    }

    /// Greater than or equal operator `>=`
    pub fn gte(left: impl Into<String>, right: impl Into<String>) -> Self {
        Statement::Comparison(Comparison::Gte(left.into(), right.into()))
    }

    /// Less than or equal operator `<=`
    pub fn lte(left: impl Into<String>, right: impl Into<String>) -> Self {
        Statement::Comparison(Comparison::Lte(left.into(), right.into()))
    }

    /// Logical AND over any number of operands
    pub fn and(operands: Vec<Statement>) -> Self {
        Statement::Logical(Logical::And(operands))
    }

    /// Logical OR over any number of operands
    pub fn or(operands: Vec<Statement>) -> Self {
        Statement::Logical(Logical::Or(operands))
    }

    /// Logical NOT over a single operand
    pub fn not(operand: Statement) -> Self {
        Statement::Logical(Logical::Not(Box::new(operand)))
    }

    /// Returns true if this is a bare comparison
    pub fn is_comparison(&self) -> bool {
        matches!(self, Statement::Comparison(_))
    }

    /// Returns true if this is a boolean combination
    pub fn is_logical(&self) -> bool {
        matches!(self, Statement::Logical(_))
    }

    /// Prop-bag projection matching the serde wire shape
    pub fn to_prop(&self) -> PropValue {
        fn tagged(tag: &str, value: PropValue) -> PropValue {
            let mut map = BTreeMap::new();
            map.insert(tag.to_string(), value);
            PropValue::Object(map)
        }

        fn operands(left: &str, right: &str) -> PropValue {
            PropValue::Array(vec![PropValue::from(left), PropValue::from(right)])
        }

        match self {
            Statement::Comparison(Comparison::Eq(l, r)) => tagged("eq", operands(l, r)),
            Statement::Comparison(Comparison::Gt(l, r)) => tagged("gt", operands(l, r)),
            Statement::Comparison(Comparison::Lt(l, r)) => tagged("lt", operands(l, r)),
            Statement::Comparison(Comparison::Gte(l, r)) => tagged("gte", operands(l, r)),
            Statement::Comparison(Comparison::Lte(l, r)) => tagged("lte", operands(l, r)),
            Statement::Logical(Logical::And(ops)) => tagged(
                "and",
                PropValue::Array(ops.iter().map(Statement::to_prop).collect()),
            ),
            Statement::Logical(Logical::Or(ops)) => tagged(
                "or",
                PropValue::Array(ops.iter().map(Statement::to_prop).collect()),
            ),
            Statement::Logical(Logical::Not(op)) => tagged("not", op.to_prop()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_comparison_constructors() {
        let statement = Statement::eq("{{a}}", "b");
        assert_eq!(
            statement,
            Statement::Comparison(Comparison::Eq("{{a}}".to_string(), "b".to_string()))
        );
        assert!(statement.is_comparison());
        assert!(!statement.is_logical());
    }

    #[test]
    fn test_logical_constructors() {
        let statement = Statement::and(vec![
            Statement::gt("{{n}}", "3"),
            Statement::lt("{{n}}", "5"),
        ]);
        assert!(statement.is_logical());

        let negated = Statement::not(Statement::eq("{{name}}", "Joe"));
        match negated {
            Statement::Logical(Logical::Not(inner)) => {
                assert_eq!(*inner, Statement::eq("{{name}}", "Joe"));
            }
            other => panic!("Expected Not, got {other:?}"),
        }
    }

    #[test]
    fn test_comparison_wire_shape() {
        let json = serde_json::to_value(Statement::eq("{{a}}", "b")).unwrap();
        assert_eq!(json, json!({ "eq": ["{{a}}", "b"] }));

        let json = serde_json::to_value(Statement::gte("{{n}}", "3")).unwrap();
        assert_eq!(json, json!({ "gte": ["{{n}}", "3"] }));
    }

    #[test]
    fn test_logical_wire_shape() {
        let statement = Statement::or(vec![
            Statement::eq("{{name}}", "Joe"),
            Statement::not(Statement::eq("{{name}}", "Alex")),
        ]);

        let json = serde_json::to_value(&statement).unwrap();
        assert_eq!(
            json,
            json!({
                "or": [
                    { "eq": ["{{name}}", "Joe"] },
                    { "not": { "eq": ["{{name}}", "Alex"] } }
                ]
            })
        );
    }

    #[test]
    fn test_statement_round_trip() {
        let statement = Statement::and(vec![
            Statement::lte("{{n}}", "10"),
            Statement::or(vec![Statement::eq("{{x}}", "y")]),
        ]);

        let json = serde_json::to_string(&statement).unwrap();
        let parsed: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, statement);
    }

    #[test]
    fn test_to_prop_matches_serde_shape() {
        let statement = Statement::and(vec![
            Statement::eq("{{a}}", "b"),
            Statement::not(Statement::gt("{{c}}", "2")),
        ]);

        assert_eq!(
            statement.to_prop().to_json(),
            serde_json::to_value(&statement).unwrap()
        );
    }
}
