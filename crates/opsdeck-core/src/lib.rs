//! opsdeck core - data model for declaratively described apps
//!
//! This crate provides the fundamental types shared across the opsdeck
//! workspace:
//! - Dynamic prop values for component property bags
//! - Operator and conditional-expression AST
//! - Action intents and their serializable projections
//! - IAM statement data
//! - Component and app/page definitions

pub mod ast;
pub mod types;

// Re-export commonly used types
pub use ast::app::{AppDefinition, PageDefinition};
pub use ast::component::{Component, SerializedComponent};
pub use ast::expression::{Expr, IfExpr};
pub use ast::intent::{
    ActionIntent, ActionProps, AppActionProps, AwsActionProps, PlainExecutionRole,
};
pub use ast::operator::{Comparison, Logical, Statement};
pub use types::iam::{Effect, IamStatement};
pub use types::PropValue;
