//! AST definitions for the opsdeck declarative model

pub mod app;
pub mod component;
pub mod expression;
pub mod intent;
pub mod operator;

pub use app::{AppDefinition, PageDefinition};
pub use component::{Component, SerializedComponent};
pub use expression::{Expr, IfExpr};
pub use intent::{ActionIntent, ActionProps, AppActionProps, AwsActionProps, PlainExecutionRole};
pub use operator::{Comparison, Logical, Statement};
