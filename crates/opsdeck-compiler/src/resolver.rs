//! Action-intent resolution
//!
//! The build-time rewrite that walks a runtime if-expression (or a bare
//! intent), replaces every embedded intent with its clean serializable
//! projection, and collects the required IAM statements along the way.
//!
//! Traversal is depth-first with the positive branch fully resolved before
//! the negative one; statements concatenate in exactly that order. No
//! deduplication happens here - a statement required by two branches shows
//! up twice, and downstream consumers are expected to tolerate that.

use opsdeck_core::{ActionIntent, ActionProps, Expr, IamStatement, IfExpr};

/// Split a bare intent into its clean projection and required statements.
///
/// Navigation intents never carry statements, so their list is empty.
pub fn translate_intent(intent: ActionIntent) -> (ActionProps, Vec<IamStatement>) {
    match intent {
        ActionIntent::Aws {
            props,
            iam_statements,
        } => (ActionProps::Aws(props), iam_statements),
        ActionIntent::App { props } => (ActionProps::App(props), Vec::new()),
    }
}

/// Resolve a value that is either a bare intent or an if-expression with
/// intents nested arbitrarily deep in its branches.
///
/// The statement of every if-node is carried over untouched; only the
/// branches are rewritten.
pub fn resolve_action_expr(expr: Expr<ActionIntent>) -> (Expr<ActionProps>, Vec<IamStatement>) {
    match expr {
        Expr::Value(intent) => {
            let (props, statements) = translate_intent(intent);
            (Expr::Value(props), statements)
        }
        Expr::If(node) => {
            let IfExpr {
                statement,
                positive,
                negative,
            } = *node;

            // Positive branch first; the order is part of the contract.
            let (positive, mut statements) = resolve_action_expr(positive);
            let (negative, negative_statements) = resolve_action_expr(negative);
            statements.extend(negative_statements);

            (
                Expr::If(Box::new(IfExpr {
                    statement,
                    positive,
                    negative,
                })),
                statements,
            )
        }
    }
}
