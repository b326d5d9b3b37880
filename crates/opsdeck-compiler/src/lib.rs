//! opsdeck compiler - declarative app trees to deployable templates
//!
//! Two layers:
//! - `resolver`: strips action intents out of (possibly nested) runtime
//!   if-expressions into clean projections plus the collected IAM
//!   statements
//! - `codegen`: turns app/page definitions into serializable templates,
//!   aggregating per-page IAM statements along the way

pub mod codegen;
pub mod error;
pub mod resolver;

// Re-export main types
pub use codegen::{AppCompiler, AppTemplate, PageCompiler, PagePolicy, PageTemplate};
pub use error::{CompileError, Result};
pub use resolver::{resolve_action_expr, translate_intent};
