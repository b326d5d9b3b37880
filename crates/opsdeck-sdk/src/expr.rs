//! Expression building helpers
//!
//! Thin free-function veneer over the core statement and expression
//! constructors, so app code reads close to the conditions it declares:
//!
//! ```
//! use opsdeck_sdk::expr::{eq, when};
//! use opsdeck_sdk::Expr;
//!
//! let label: Expr<String> = when(eq("{{operation}}", "create"), "Create", "Save");
//! # let _ = label;
//! ```

use opsdeck_core::{Expr, Statement};

/// `left == right` comparison over runtime values
pub fn eq(left: impl Into<String>, right: impl Into<String>) -> Statement {
    Statement::eq(left, right)
}

/// `left > right` comparison over runtime values
pub fn gt(left: impl Into<String>, right: impl Into<String>) -> Statement {
    Statement::gt(left, right)
}

/// `left < right` comparison over runtime values
pub fn lt(left: impl Into<String>, right: impl Into<String>) -> Statement {
    Statement::lt(left, right)
}

/// `left >= right` comparison over runtime values
pub fn gte(left: impl Into<String>, right: impl Into<String>) -> Statement {
    Statement::gte(left, right)
}

/// `left <= right` comparison over runtime values
pub fn lte(left: impl Into<String>, right: impl Into<String>) -> Statement {
    Statement::lte(left, right)
}

/// All operands must hold
pub fn and(operands: Vec<Statement>) -> Statement {
    Statement::and(operands)
}

/// At least one operand must hold
pub fn or(operands: Vec<Statement>) -> Statement {
    Statement::or(operands)
}

/// Negate a statement
pub fn not(operand: Statement) -> Statement {
    Statement::not(operand)
}

/// Runtime if-expression: evaluates `statement` against live app state and
/// picks a branch. Branches nest: either side may itself be a `when`.
pub fn when<T>(
    statement: Statement,
    positive: impl Into<Expr<T>>,
    negative: impl Into<Expr<T>>,
) -> Expr<T> {
    Expr::when(statement, positive, negative)
}
