//! Template codegen

pub mod app;
pub mod page;

pub use app::{AppCompiler, AppTemplate, PagePolicy};
pub use page::{PageCompiler, PageTemplate};
