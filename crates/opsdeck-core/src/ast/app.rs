//! Declarative app and page definitions
//!
//! The plain data tree handed to the compiler. Assembling and validating
//! these is the SDK's job; nothing here is checked at construction time.

use crate::ast::component::Component;
use crate::ast::intent::{ActionIntent, PlainExecutionRole};

/// A single page: metadata, load-time actions and the component body
#[derive(Debug, Clone, Default)]
pub struct PageDefinition {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    /// Actions invoked when the page loads, keyed by the state id their
    /// result is stored under. Declaration order is preserved.
    pub initial_state: Vec<(String, ActionIntent)>,
    /// Components rendered in declaration order
    pub body: Vec<Component>,
}

/// A deployable app: metadata plus its pages in insertion order.
///
/// The first page in the list is the app's landing page.
#[derive(Debug, Clone)]
pub struct AppDefinition {
    pub name: String,
    pub description: String,
    pub stage: String,
    pub tags: Vec<String>,
    pub execution_role: Option<PlainExecutionRole>,
    pub pages: Vec<(String, PageDefinition)>,
}
